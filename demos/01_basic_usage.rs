//! # Basic Usage Example
//!
//! This example demonstrates the fundamental concepts of modelmap:
//! - Defining an entity and wiring it up with `impl_mapped_entity!`
//! - Building a `NameMap` from specifier strings
//! - Reading typed collections with `read`
//! - Running statements with `exec` and scalar queries with `count`
//! - Checking the per-accessor status code
//!
//! This is the perfect starting point for new users.

use anyhow::Result;
use modelmap::prelude::*;

/// A simple user entity. Properties are logical names; the NameMap decides
/// which result columns feed them.
#[derive(Debug, Default)]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
}

impl_mapped_entity!(User {
    "Name" => name,
    "Email" => email,
    "Phone" => phone,
    "Age" => age,
});

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 Modelmap Basic Usage Example");
    println!("================================");

    // 1. Setup Database Connection
    println!("\n📊 Step 1: Database Setup");
    println!("--------------------------");

    let config = DatabaseConfig::new(
        "localhost".to_string(),
        5432,
        "modelmap".to_string(),
        "postgres".to_string(),
        "password".to_string(),
    );
    let mut modelmap = ModelMap::new(config);
    modelmap.health_check().await?;
    println!("connected to {}", modelmap.connection_string());

    // 2. Register the entity map
    println!("\n🗺️  Step 2: Entity Map");
    println!("----------------------");

    let user_map = NameMap::parse([
        "Name : name",
        "Email : email",
        "Phone : phone",
        "Age : age",
    ])?;
    println!("{} properties mapped", user_map.len());
    modelmap.register_map("users".to_string(), user_map)?;

    // 3. Write some rows
    println!("\n✏️  Step 3: Insert");
    println!("------------------");

    let mut access = modelmap.access();
    access
        .exec("CREATE TABLE IF NOT EXISTS users (name TEXT, email TEXT, phone TEXT, age INT)")
        .await?;
    access
        .exec(
            "INSERT INTO users (name, email, phone, age) VALUES \
             ('Ann', 'ann@example.com', '555-0100', 30), \
             ('Bo', 'bo@example.com', NULL, 41)",
        )
        .await?;
    println!("insert status: {}", access.status());

    // 4. Read them back as typed entities
    println!("\n📖 Step 4: Read");
    println!("---------------");

    let users: Vec<User> = access
        .read("SELECT * FROM users ORDER BY name", modelmap.map("users")?)
        .await?;
    for user in &users {
        // Bo's NULL phone comes back as the empty string.
        println!("  {} <{}> phone='{}' age={}", user.name, user.email, user.phone, user.age);
    }

    // 5. Count
    println!("\n🔢 Step 5: Count");
    println!("----------------");

    let adults = access
        .count("SELECT COUNT(*) FROM users WHERE age >= 18")
        .await?;
    println!("{adults} adults, status {}", access.status());

    access.exec("DROP TABLE users").await?;

    Ok(())
}
