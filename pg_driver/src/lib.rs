//! PostgreSQL driver for the modelmap data-access layer
//!
//! Implements the driver traits on top of a single non-pooled sqlx
//! connection. Each session gets its own connection, opened and closed
//! around exactly one operation, which matches the engine's bracket model.

mod convert;

use async_trait::async_trait;
use data_access::{Driver, DriverConnection, DriverError};
use row_mapping::ResultRow;
use sqlx::postgres::PgConnection;
use sqlx::Connection;

/// Factory handing out single PostgreSQL connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgDriver;

impl PgDriver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Driver for PgDriver {
    type Conn = PgDriverConnection;

    async fn connect(&self, connection_string: &str) -> Result<Self::Conn, DriverError> {
        let conn = PgConnection::connect(connection_string)
            .await
            .map_err(|err| DriverError::with_source("failed to connect to PostgreSQL", err))?;
        Ok(PgDriverConnection { conn })
    }
}

/// One live PostgreSQL connection.
pub struct PgDriverConnection {
    conn: PgConnection,
}

#[async_trait]
impl DriverConnection for PgDriverConnection {
    async fn execute(&mut self, statement: &str) -> Result<u64, DriverError> {
        let result = sqlx::query(statement)
            .execute(&mut self.conn)
            .await
            .map_err(|err| DriverError::with_source("statement execution failed", err))?;
        tracing::debug!(rows_affected = result.rows_affected(), "statement executed");
        Ok(result.rows_affected())
    }

    async fn query(&mut self, query: &str) -> Result<Vec<ResultRow>, DriverError> {
        let rows = sqlx::query(query)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|err| DriverError::with_source("query execution failed", err))?;
        rows.iter().map(convert::result_row_from_pg).collect()
    }

    async fn query_scalar(&mut self, query: &str) -> Result<i64, DriverError> {
        sqlx::query_scalar::<_, i64>(query)
            .fetch_one(&mut self.conn)
            .await
            .map_err(|err| DriverError::with_source("scalar query failed", err))
    }

    async fn close(self) -> Result<(), DriverError> {
        self.conn
            .close()
            .await
            .map_err(|err| DriverError::with_source("failed to close connection", err))
    }
}
