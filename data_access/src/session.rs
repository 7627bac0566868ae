//! Connection session lifecycle
//!
//! A session owns at most one live driver connection and moves between
//! closed and open. Every accessor operation brackets itself with one
//! open/close pair; sessions are never pooled, reused, or reentrant.

use crate::errors::DataAccessError;
use crate::traits::{Driver, DriverConnection};

pub struct ConnectionSession<D: Driver> {
    driver: D,
    connection_string: String,
    conn: Option<D::Conn>,
}

impl<D: Driver> std::fmt::Debug for ConnectionSession<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSession")
            .field("is_open", &self.is_open())
            .finish()
    }
}

impl<D: Driver> ConnectionSession<D> {
    pub fn new(driver: D, connection_string: impl Into<String>) -> Self {
        Self {
            driver,
            connection_string: connection_string.into(),
            conn: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Open the underlying connection.
    ///
    /// The driver-level cause is preserved in the returned error; opening an
    /// already-open session is an error because sessions are not reentrant.
    pub async fn open(&mut self) -> Result<(), DataAccessError> {
        if self.conn.is_some() {
            return Err(DataAccessError::SessionAlreadyOpen);
        }
        tracing::debug!("opening connection session");
        let conn = self
            .driver
            .connect(&self.connection_string)
            .await
            .map_err(DataAccessError::Connect)?;
        self.conn = Some(conn);
        Ok(())
    }

    /// Close the underlying connection, returning the session to its
    /// initial state even when the driver reports a close failure.
    pub async fn close(&mut self) -> Result<(), DataAccessError> {
        let conn = self.conn.take().ok_or(DataAccessError::SessionNotOpen)?;
        tracing::debug!("closing connection session");
        conn.close().await.map_err(DataAccessError::Close)
    }

    /// The live connection, for the duration of one operation.
    pub fn connection(&mut self) -> Result<&mut D::Conn, DataAccessError> {
        self.conn.as_mut().ok_or(DataAccessError::SessionNotOpen)
    }
}
