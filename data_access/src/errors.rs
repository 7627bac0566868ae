use thiserror::Error;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Driver-level failure with the underlying cause preserved.
///
/// Drivers collapse their native error types into this one at the trait
/// boundary; the source chain keeps the original error reachable.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct DriverError {
    message: String,
    #[source]
    source: Option<BoxedCause>,
}

impl DriverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxedCause>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("failed to open connection: {0}")]
    Connect(#[source] DriverError),

    #[error("failed to close connection: {0}")]
    Close(#[source] DriverError),

    #[error("statement execution failed: {0}")]
    Execute(#[source] DriverError),

    #[error("query execution failed: {0}")]
    Query(#[source] DriverError),

    #[error("scalar query failed: {0}")]
    Scalar(#[source] DriverError),

    #[error("session is already open")]
    SessionAlreadyOpen,

    #[error("session is not open")]
    SessionNotOpen,
}
