//! # Entity Map Example
//!
//! Shows what makes the translation table interesting on its own:
//! - first-write-wins on duplicate properties
//! - first-registered-wins on shared columns
//! - ordinal access and iteration
//! - swapping the registered map to absorb a schema rename

use anyhow::Result;
use modelmap::prelude::*;

fn main() -> Result<()> {
    println!("🗺️  Modelmap Entity Map Example");
    println!("===============================");

    let mut map = NameMap::parse([
        "Name : full_name",
        "Email : email",
        "DisplayName : full_name", // shares a column with Name
    ])?;

    // Duplicate property registration is a no-op; Name keeps full_name.
    map.add("Name", "some_other_column");

    println!("\nforward lookups:");
    for (property, column) in map.iter() {
        println!("  {property} -> {column}");
    }

    println!("\nreverse lookups:");
    // Name registered full_name first, so it owns the reverse mapping.
    println!("  full_name -> {:?}", map.property_for("full_name"));
    println!("  email     -> {:?}", map.property_for("  email  "));
    println!("  unknown   -> {:?}", map.property_for("unknown"));

    println!("\nordinal access:");
    for index in 0..map.len() {
        println!("  [{index}] {:?}", map.property_at(index));
    }

    // The registry makes maps swappable without touching entity types.
    let mut modelmap = ModelMap::from_connection_string("postgresql://localhost/demo");
    modelmap.register_map("people".to_string(), map)?;

    let renamed_schema = NameMap::parse(["Name : person_name", "Email : contact_email"])?;
    modelmap.replace_map("people".to_string(), renamed_schema);
    println!(
        "\nafter swap, Name reads from {:?}",
        modelmap.map("people")?.field_for("Name")
    );

    Ok(())
}
