//! Generic row-to-entity decoding
//!
//! The pure half of the mapper engine: given rows and a name map, produce
//! entities. Connection handling lives in the data-access crate.

use crate::entity::MappedEntity;
use crate::name_map::NameMap;
use crate::row::ResultRow;

/// Decode one row into an entity.
///
/// Every field is resolved through the name map by its column name. A column
/// with no mapped property is skipped and the entity keeps its default value
/// for whatever that column would have fed.
pub fn decode_row<T: MappedEntity>(row: &ResultRow, map: &NameMap) -> T {
    let mut entity = T::default();
    for (name, value) in row.iter() {
        if let Some(property) = map.property_for(name) {
            entity.assign(property, value.to_text());
        }
    }
    entity
}

/// Decode a result set into entities, preserving cursor order.
pub fn decode_rows<T: MappedEntity>(rows: &[ResultRow], map: &NameMap) -> Vec<T> {
    rows.iter().map(|row| decode_row(row, map)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{impl_mapped_entity, SqlValue};

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Person {
        name: String,
        age: String,
    }

    impl_mapped_entity!(Person {
        "Name" => name,
        "Age" => age,
    });

    fn person_map() -> NameMap {
        NameMap::parse(["Name : name", "Age : age"]).unwrap()
    }

    #[test]
    fn test_rows_decode_in_cursor_order() {
        let rows = vec![
            ResultRow::new().with_field("name", "Ann").with_field("age", "30"),
            ResultRow::new().with_field("name", "Bo").with_field("age", "41"),
        ];

        let people: Vec<Person> = decode_rows(&rows, &person_map());

        assert_eq!(
            people,
            vec![
                Person { name: "Ann".to_string(), age: "30".to_string() },
                Person { name: "Bo".to_string(), age: "41".to_string() },
            ]
        );
    }

    #[test]
    fn test_unmapped_column_is_skipped() {
        let row = ResultRow::new()
            .with_field("name", "Ann")
            .with_field("shoe_size", 38i32);

        let person: Person = decode_row(&row, &person_map());

        assert_eq!(person.name, "Ann");
        assert_eq!(person.age, "");
    }

    #[test]
    fn test_values_are_coerced_to_text() {
        let row = ResultRow::new()
            .with_field("name", SqlValue::Null)
            .with_field("age", 30i64);

        let person: Person = decode_row(&row, &person_map());

        assert_eq!(person.name, "");
        assert_eq!(person.age, "30");
    }

    #[test]
    fn test_empty_result_set() {
        let people: Vec<Person> = decode_rows(&[], &person_map());
        assert!(people.is_empty());
    }
}
