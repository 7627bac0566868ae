//! # Modelmap
//!
//! A generic row-to-entity mapping layer for PostgreSQL with table-driven,
//! swappable name translation between entity properties and result columns.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modelmap::prelude::*;
//!
//! #[derive(Debug, Default)]
//! pub struct User {
//!     pub name: String,
//!     pub email: String,
//! }
//!
//! impl_mapped_entity!(User {
//!     "Name" => name,
//!     "Email" => email,
//! });
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "modelmap".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!     );
//!
//!     let mut modelmap = ModelMap::new(config);
//!     modelmap.register_map(
//!         "users".to_string(),
//!         NameMap::parse(["Name : name", "Email : email"])?,
//!     )?;
//!
//!     let mut access = modelmap.access();
//!     let users: Vec<User> = access
//!         .read("SELECT name, email FROM users", modelmap.map("users")?)
//!         .await?;
//!     println!("loaded {} users, status {}", users.len(), access.status());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::ModelMap;
pub use crate::errors::ModelMapError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Re-export internal crates used in the public API
pub use data_access;
pub use pg_driver;
pub use row_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
