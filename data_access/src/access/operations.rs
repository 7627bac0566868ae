//! Accessor operations
//!
//! Each operation independently brackets itself with open-then-close, so
//! calls are not composable into a transaction. A failed open short-circuits
//! the operation: nothing is sent to the database, the status code records
//! the failure, and the connect error is returned.

use row_mapping::{decode_rows, MappedEntity, NameMap};

use super::core::DataAccess;
use crate::errors::DataAccessError;
use crate::traits::{Driver, DriverConnection};

impl<D: Driver> DataAccess<D> {
    /// Run a query and map every result row into a `T`.
    ///
    /// Columns are resolved to properties through `map`; a column with no
    /// mapped property is skipped and the entity keeps its default for it.
    /// Row order follows cursor order.
    pub async fn read<T: MappedEntity>(
        &mut self,
        query: &str,
        map: &NameMap,
    ) -> Result<Vec<T>, DataAccessError> {
        if let Err(err) = self.session.open().await {
            self.status.record_failure();
            return Err(err);
        }

        let outcome = match self.session.connection() {
            Ok(conn) => conn.query(query).await.map_err(DataAccessError::Query),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(rows) => {
                let entities = decode_rows(&rows, map);
                tracing::debug!(rows = entities.len(), "query mapped into entities");
                self.status.record_success();
                self.close_quietly().await;
                Ok(entities)
            }
            Err(err) => {
                self.status.record_failure();
                self.close_quietly().await;
                Err(err)
            }
        }
    }

    /// Run a statement expected to produce no result set.
    pub async fn exec(&mut self, statement: &str) -> Result<(), DataAccessError> {
        if let Err(err) = self.session.open().await {
            self.status.record_failure();
            return Err(err);
        }

        let outcome = match self.session.connection() {
            Ok(conn) => conn
                .execute(statement)
                .await
                .map_err(DataAccessError::Execute),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(affected) => {
                tracing::debug!(affected, "statement executed");
                self.status.record_success();
                self.close_quietly().await;
                Ok(())
            }
            Err(err) => {
                self.status.record_failure();
                self.close_quietly().await;
                Err(err)
            }
        }
    }

    /// Run a scalar query and return its value as an integer.
    pub async fn count(&mut self, query: &str) -> Result<i64, DataAccessError> {
        if let Err(err) = self.session.open().await {
            self.status.record_failure();
            return Err(err);
        }

        let outcome = match self.session.connection() {
            Ok(conn) => conn
                .query_scalar(query)
                .await
                .map_err(DataAccessError::Scalar),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(count) => {
                tracing::debug!(count, "scalar query evaluated");
                self.status.record_success();
                self.close_quietly().await;
                Ok(count)
            }
            Err(err) => {
                self.status.record_failure();
                self.close_quietly().await;
                Err(err)
            }
        }
    }

    // The status code is settled before the bracket closes; a close failure
    // cannot retroactively fail an operation whose work already finished.
    async fn close_quietly(&mut self) {
        if let Err(err) = self.session.close().await {
            tracing::warn!("session did not close cleanly: {err}");
        }
    }
}
