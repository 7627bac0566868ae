//! # Quick Demo
//!
//! The fastest tour of modelmap: register an entity map, read typed rows,
//! run a statement, take a count, and watch the status code.
//!
//! Requires a running PostgreSQL instance (see DatabaseConfig below).

use anyhow::Result;
use modelmap::prelude::*;

#[derive(Debug, Default)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl_mapped_entity!(User {
    "Name" => name,
    "Email" => email,
});

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 Modelmap Quick Demo");
    println!("======================");

    let config = DatabaseConfig::new(
        "localhost".to_string(),
        5432,
        "modelmap".to_string(),
        "postgres".to_string(),
        "password".to_string(),
    );

    let mut modelmap = ModelMap::new(config);
    modelmap.register_map(
        "users".to_string(),
        NameMap::parse(["Name : name", "Email : email"])?,
    )?;

    let mut access = modelmap.access();

    access
        .exec("CREATE TABLE IF NOT EXISTS users (name TEXT, email TEXT)")
        .await?;
    access
        .exec("INSERT INTO users (name, email) VALUES ('Ann', 'ann@example.com')")
        .await?;
    println!("insert status: {}", access.status());

    let users: Vec<User> = access
        .read("SELECT name, email FROM users", modelmap.map("users")?)
        .await?;
    for user in &users {
        println!("  {} <{}>", user.name, user.email);
    }

    let total = access.count("SELECT COUNT(*) FROM users").await?;
    println!("{total} users, status {}", access.status());

    access.exec("DROP TABLE users").await?;

    Ok(())
}
