//! Convenience re-exports for common data-access usage

// Core accessor
pub use crate::access::DataAccess;

// Session and status
pub use crate::session::ConnectionSession;
pub use crate::status::{StatusTracker, STATUS_FAILURE, STATUS_IDLE, STATUS_SUCCESS};

// Error types
pub use crate::errors::{DataAccessError, DriverError};

// Driver boundary
pub use crate::traits::{Driver, DriverConnection};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use row_mapping::{decode_row, decode_rows, MappedEntity, NameMap, ResultRow, SqlValue};
