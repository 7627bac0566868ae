//! Convenience re-exports for common Modelmap usage
//!
//! This prelude module re-exports the most commonly used items from the
//! modelmap ecosystem, making it easier to import everything you need with a
//! single use statement.
//!
//! # Example
//!
//! ```rust
//! use modelmap::prelude::*;
//!
//! // Now you have access to all the common modelmap types and traits
//! ```

// Core modelmap components
pub use crate::core::ModelMap;
pub use crate::errors::ModelMapError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Row mapping: name translation, values, entity decoding
pub use row_mapping::{
    decode_row, decode_rows, impl_mapped_entity, MappedEntity, NameMap, NameMapError, ResultRow,
    SqlValue,
};

// Data access: accessor, session, status, driver boundary
pub use data_access::prelude::*;

// PostgreSQL driver
pub use pg_driver::PgDriver;

// Common external dependencies
pub use async_trait;
pub use sqlx;
pub use tokio;

// Commonly used external types
pub use chrono::{DateTime, Utc};
pub use uuid::Uuid;
