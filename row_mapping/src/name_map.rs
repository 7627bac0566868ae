//! Property/column name translation
//!
//! `NameMap` is the bidirectional table between logical property names on an
//! entity and physical column names in a result set. Entries keep insertion
//! order; property names are unique keys and the first registration wins.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameMapError {
    #[error("specifier '{0}' is missing the ':' separator")]
    MissingSeparator(String),

    #[error("specifier '{0}' has an empty property name")]
    EmptyProperty(String),

    #[error("specifier '{0}' has an empty column name")]
    EmptyColumn(String),
}

/// Ordered property -> column translation table with a reverse index.
///
/// The reverse index is maintained at insertion time, so column -> property
/// lookup is constant-time while still honoring first-registered-wins when
/// several properties map to the same column.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    entries: Vec<(String, String)>,
    by_property: HashMap<String, usize>,
    by_column: HashMap<String, usize>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `"Property : column"` specifier strings.
    ///
    /// Each specifier is split on its first colon and both halves are
    /// trimmed. Missing separators and empty halves are reported as errors.
    pub fn parse<I, S>(specifiers: I) -> Result<Self, NameMapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for specifier in specifiers {
            let specifier = specifier.as_ref();
            let (property, column) = specifier
                .split_once(':')
                .ok_or_else(|| NameMapError::MissingSeparator(specifier.to_string()))?;
            if property.trim().is_empty() {
                return Err(NameMapError::EmptyProperty(specifier.to_string()));
            }
            if column.trim().is_empty() {
                return Err(NameMapError::EmptyColumn(specifier.to_string()));
            }
            map.add(property, column);
        }
        Ok(map)
    }

    /// Build a map from already-split `(property, column)` pairs.
    pub fn from_pairs<I, P, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: AsRef<str>,
    {
        let mut map = Self::new();
        for (property, column) in pairs {
            map.add(property.as_ref(), column.as_ref());
        }
        map
    }

    /// Register a property -> column pair.
    ///
    /// Registering a property that is already present is a no-op, not an
    /// error; the originally mapped column is retained.
    pub fn add(&mut self, property: &str, column: &str) {
        let property = property.trim();
        let column = column.trim();
        if self.by_property.contains_key(property) {
            return;
        }
        let index = self.entries.len();
        self.entries.push((property.to_string(), column.to_string()));
        self.by_property.insert(property.to_string(), index);
        // First property registered for a column owns the reverse mapping.
        self.by_column.entry(column.to_string()).or_insert(index);
    }

    /// Column mapped to `property`, if any.
    pub fn field_for(&self, property: &str) -> Option<&str> {
        self.by_property
            .get(property.trim())
            .map(|&index| self.entries[index].1.as_str())
    }

    /// Property mapped to `column`, if any.
    ///
    /// When several properties share a column, the first one registered is
    /// returned. Lookup trims the input, matching how entries are stored.
    pub fn property_for(&self, column: &str) -> Option<&str> {
        self.by_column
            .get(column.trim())
            .map(|&index| self.entries[index].0.as_str())
    }

    /// Property name at `index` in insertion order.
    pub fn property_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(property, _)| property.as_str())
    }

    /// Number of distinct properties registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(property, column)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(property, column)| (property.as_str(), column.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_reverse_lookup() {
        let map = NameMap::parse(["Name : name", "Age : age"]).unwrap();

        assert_eq!(map.field_for("Name"), Some("name"));
        assert_eq!(map.field_for("Age"), Some("age"));
        assert_eq!(map.property_for("name"), Some("Name"));
        assert_eq!(map.property_for("age"), Some("Age"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_unknown_names_return_none() {
        let map = NameMap::parse(["Name : name"]).unwrap();

        assert_eq!(map.field_for("Missing"), None);
        assert_eq!(map.property_for("never_registered"), None);
        assert_eq!(map.property_at(5), None);
    }

    #[test]
    fn test_duplicate_property_is_a_noop() {
        let mut map = NameMap::new();
        map.add("Name", "name");
        map.add("Name", "other_column");

        assert_eq!(map.len(), 1);
        assert_eq!(map.field_for("Name"), Some("name"));
    }

    #[test]
    fn test_duplicate_column_first_registered_wins() {
        let map = NameMap::parse(["Title : label", "Caption : label"]).unwrap();

        assert_eq!(map.property_for("label"), Some("Title"));
        assert_eq!(map.field_for("Caption"), Some("label"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_specifier_trimming() {
        let map = NameMap::parse(["  Name :  full_name  "]).unwrap();

        assert_eq!(map.field_for("Name"), Some("full_name"));
        assert_eq!(map.property_for("  full_name "), Some("Name"));
    }

    #[test]
    fn test_split_happens_on_first_colon() {
        // The column half keeps any further colons verbatim.
        let map = NameMap::parse(["Path : ns:path"]).unwrap();

        assert_eq!(map.field_for("Path"), Some("ns:path"));
        assert_eq!(map.property_for("ns:path"), Some("Path"));
    }

    #[test]
    fn test_malformed_specifiers() {
        assert_eq!(
            NameMap::parse(["NameWithoutColumn"]).unwrap_err(),
            NameMapError::MissingSeparator("NameWithoutColumn".to_string())
        );
        assert_eq!(
            NameMap::parse([" : column"]).unwrap_err(),
            NameMapError::EmptyProperty(" : column".to_string())
        );
        assert_eq!(
            NameMap::parse(["Name : "]).unwrap_err(),
            NameMapError::EmptyColumn("Name : ".to_string())
        );
    }

    #[test]
    fn test_ordinal_access_keeps_insertion_order() {
        let map = NameMap::from_pairs([("Name", "name"), ("Age", "age"), ("City", "city")]);

        assert_eq!(map.property_at(0), Some("Name"));
        assert_eq!(map.property_at(1), Some("Age"));
        assert_eq!(map.property_at(2), Some("City"));

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("Name", "name"), ("Age", "age"), ("City", "city")]);
    }
}
