use crate::session::ConnectionSession;
use crate::status::StatusTracker;
use crate::traits::Driver;

/// Generic accessor bound to one driver and one connection string.
///
/// Operations take `&mut self`: one accessor runs one operation at a time,
/// so the status code always refers to the most recently completed call.
pub struct DataAccess<D: Driver> {
    pub(crate) session: ConnectionSession<D>,
    pub(crate) status: StatusTracker,
}

impl<D: Driver> std::fmt::Debug for DataAccess<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataAccess")
            .field("session", &self.session)
            .field("status", &self.status.get())
            .finish()
    }
}

impl<D: Driver> DataAccess<D> {
    pub fn new(driver: D, connection_string: impl Into<String>) -> Self {
        Self {
            session: ConnectionSession::new(driver, connection_string),
            status: StatusTracker::new(),
        }
    }

    /// Status code recorded by the most recently completed operation.
    pub fn status(&self) -> u16 {
        self.status.get()
    }
}
