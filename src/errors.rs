//! Error types for the Modelmap crate
//!
//! This module contains all error types that can be returned by ModelMap operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelMapError {
    #[error("Data access error: {0}")]
    DataAccess(#[from] data_access::DataAccessError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Entity map not found: {0}")]
    MapNotFound(String),

    #[error("Entity map already registered: {0}")]
    MapAlreadyRegistered(String),
}
