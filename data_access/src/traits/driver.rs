//! Database driver boundary
//!
//! The engine treats the actual database client as an external collaborator
//! behind these two traits. Connection strings pass through verbatim; result
//! rows come back in the driver-neutral `ResultRow` model.

use async_trait::async_trait;
use row_mapping::ResultRow;

use crate::errors::DriverError;

/// Factory for database connections.
#[async_trait]
pub trait Driver: Send + Sync {
    type Conn: DriverConnection;

    /// Open a new connection. The connection string is forwarded to the
    /// underlying client unmodified; the engine never parses it.
    async fn connect(&self, connection_string: &str) -> Result<Self::Conn, DriverError>;
}

/// One live database connection.
#[async_trait]
pub trait DriverConnection: Send {
    /// Run a statement that produces no result set; returns rows affected.
    async fn execute(&mut self, statement: &str) -> Result<u64, DriverError>;

    /// Run a query and collect every row with its column names.
    async fn query(&mut self, query: &str) -> Result<Vec<ResultRow>, DriverError>;

    /// Run a query expected to yield a single integer-castable value.
    async fn query_scalar(&mut self, query: &str) -> Result<i64, DriverError>;

    /// Close the connection, consuming it.
    async fn close(self) -> Result<(), DriverError>;
}
