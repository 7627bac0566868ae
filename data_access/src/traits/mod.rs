//! Driver abstraction traits

pub mod driver;

pub use driver::{Driver, DriverConnection};
