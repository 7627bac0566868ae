//! SQL value model
//!
//! This module provides the driver-neutral representation of column values
//! and the textual coercion applied before property assignment.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column values as produced by a database driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Text(String),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Decimal(String), // Store as string to preserve precision
    Json(serde_json::Value),
    Null,
}

impl SqlValue {
    /// Textual form of the value as assigned to entity properties.
    ///
    /// SQL NULL coerces to the empty string, so a nullable column lands in a
    /// `String` property as `""` rather than poisoning the whole row.
    pub fn to_text(&self) -> String {
        match self {
            SqlValue::Text(value) => value.clone(),
            SqlValue::SmallInt(value) => value.to_string(),
            SqlValue::Integer(value) => value.to_string(),
            SqlValue::BigInt(value) => value.to_string(),
            SqlValue::Float(value) => value.to_string(),
            SqlValue::Boolean(value) => value.to_string(),
            SqlValue::Uuid(value) => value.to_string(),
            SqlValue::Timestamp(value) => value.to_rfc3339(),
            SqlValue::Decimal(value) => value.clone(),
            SqlValue::Json(value) => value.to_string(),
            SqlValue::Null => String::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// Convert basic Rust types to SqlValue
impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<i16> for SqlValue {
    fn from(val: i16) -> Self {
        SqlValue::SmallInt(val)
    }
}

impl From<i32> for SqlValue {
    fn from(val: i32) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<i64> for SqlValue {
    fn from(val: i64) -> Self {
        SqlValue::BigInt(val)
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Float(val)
    }
}

impl From<bool> for SqlValue {
    fn from(val: bool) -> Self {
        SqlValue::Boolean(val)
    }
}

impl From<Uuid> for SqlValue {
    fn from(val: Uuid) -> Self {
        SqlValue::Uuid(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for SqlValue {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        SqlValue::Timestamp(val)
    }
}

impl From<serde_json::Value> for SqlValue {
    fn from(val: serde_json::Value) -> Self {
        SqlValue::Json(val)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}
