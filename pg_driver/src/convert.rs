//! PostgreSQL row decoding into the driver-neutral value model
//!
//! Column values are decoded by their PostgreSQL type name into the closest
//! `SqlValue` variant. Types outside the supported set fall back to a
//! textual read, so anything the wire renders as text still maps cleanly.

use data_access::DriverError;
use row_mapping::{ResultRow, SqlValue};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

pub(crate) fn result_row_from_pg(row: &PgRow) -> Result<ResultRow, DriverError> {
    let mut result = ResultRow::new();
    for (index, column) in row.columns().iter().enumerate() {
        let value = decode_column(row, index, column.type_info().name())?;
        result.push(column.name(), value);
    }
    Ok(result)
}

fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Result<SqlValue, DriverError> {
    let raw = row
        .try_get_raw(index)
        .map_err(|err| decode_error(type_name, err))?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }

    let value = match type_name {
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => {
            SqlValue::Text(row.try_get::<String, _>(index).map_err(|err| decode_error(type_name, err))?)
        }
        "INT2" => SqlValue::SmallInt(row.try_get::<i16, _>(index).map_err(|err| decode_error(type_name, err))?),
        "INT4" => SqlValue::Integer(row.try_get::<i32, _>(index).map_err(|err| decode_error(type_name, err))?),
        "INT8" => SqlValue::BigInt(row.try_get::<i64, _>(index).map_err(|err| decode_error(type_name, err))?),
        "FLOAT4" => {
            SqlValue::Float(row.try_get::<f32, _>(index).map_err(|err| decode_error(type_name, err))? as f64)
        }
        "FLOAT8" => SqlValue::Float(row.try_get::<f64, _>(index).map_err(|err| decode_error(type_name, err))?),
        "BOOL" => SqlValue::Boolean(row.try_get::<bool, _>(index).map_err(|err| decode_error(type_name, err))?),
        "UUID" => SqlValue::Uuid(row.try_get::<uuid::Uuid, _>(index).map_err(|err| decode_error(type_name, err))?),
        "TIMESTAMPTZ" => SqlValue::Timestamp(
            row.try_get::<chrono::DateTime<chrono::Utc>, _>(index)
                .map_err(|err| decode_error(type_name, err))?,
        ),
        "TIMESTAMP" => SqlValue::Timestamp(
            row.try_get::<chrono::NaiveDateTime, _>(index)
                .map_err(|err| decode_error(type_name, err))?
                .and_utc(),
        ),
        "DATE" => SqlValue::Text(
            row.try_get::<chrono::NaiveDate, _>(index)
                .map_err(|err| decode_error(type_name, err))?
                .to_string(),
        ),
        "JSON" | "JSONB" => SqlValue::Json(
            row.try_get::<serde_json::Value, _>(index)
                .map_err(|err| decode_error(type_name, err))?,
        ),
        other => match row.try_get::<String, _>(index) {
            Ok(text) => SqlValue::Text(text),
            Err(err) => {
                return Err(DriverError::with_source(
                    format!("unsupported column type {other}"),
                    err,
                ))
            }
        },
    };
    Ok(value)
}

fn decode_error(type_name: &str, err: sqlx::Error) -> DriverError {
    DriverError::with_source(format!("failed to decode {type_name} column"), err)
}
