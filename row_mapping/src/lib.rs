//! Name translation and row decoding for the modelmap ecosystem
//! This crate provides the driver-neutral value model, the property/column
//! translation table, and the generic row-to-entity decoding used across modelmap

pub mod decode;
pub mod entity;
pub mod name_map;
pub mod row;
pub mod values;

// Re-export commonly used items
pub use decode::{decode_row, decode_rows};
pub use entity::MappedEntity;
pub use name_map::{NameMap, NameMapError};
pub use row::ResultRow;
pub use values::SqlValue;
