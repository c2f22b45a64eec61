//! Execute a synthesized query against the database.

use indexmap::IndexMap;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgColumn, PgRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use query_engine_sql::sql::string::{Param, SQL};

use crate::error::Error;

/// Rows as ordered column→value mappings. An empty result is a valid,
/// non-error outcome ("no records found").
pub type Rows = Vec<IndexMap<String, Value>>;

type PgQuery<'q> = sqlx::query::Query<'q, sqlx::Postgres, PgArguments>;

/// Run a query, binding its parameters by their JSON type.
pub async fn execute(pool: &sqlx::PgPool, query: &SQL) -> Result<Rows, Error> {
    tracing::info!("executing query: {}", query.sql);

    let statement = query
        .params
        .iter()
        .fold(sqlx::query(&query.sql), bind_param);

    let rows = statement.fetch_all(pool).await?;
    rows.iter().map(row_to_object).collect()
}

fn bind_param<'q>(statement: PgQuery<'q>, param: &'q Param) -> PgQuery<'q> {
    match param {
        Param::String(text) => statement.bind(text.as_str()),
        Param::Value(value) => match value {
            Value::Number(number) => match number.as_i64() {
                Some(int) => statement.bind(int),
                None => statement.bind(number.as_f64()),
            },
            Value::String(text) => statement.bind(text.as_str()),
            Value::Bool(boolean) => statement.bind(*boolean),
            Value::Null => statement.bind(None::<String>),
            Value::Array(_) | Value::Object(_) => statement.bind(sqlx::types::Json(value.clone())),
        },
    }
}

fn row_to_object(row: &PgRow) -> Result<IndexMap<String, Value>, Error> {
    let mut object = IndexMap::new();
    for column in row.columns() {
        object.insert(column.name().to_string(), decode_column(row, column)?);
    }
    Ok(object)
}

/// Decode one column into JSON by its Postgres type name. Types outside the
/// mapping fall back to their text form, or null when even that fails.
fn decode_column(row: &PgRow, column: &PgColumn) -> Result<Value, Error> {
    let index = column.ordinal();
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match column.type_info().name() {
        "BOOL" => Value::Bool(row.try_get::<bool, _>(index)?),
        "INT2" => Value::from(row.try_get::<i16, _>(index)?),
        "INT4" => Value::from(row.try_get::<i32, _>(index)?),
        "INT8" => Value::from(row.try_get::<i64, _>(index)?),
        "FLOAT4" => Value::from(row.try_get::<f32, _>(index)?),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(index)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CHAR" => {
            Value::String(row.try_get::<String, _>(index)?)
        }
        "UUID" => Value::String(row.try_get::<uuid::Uuid, _>(index)?.to_string()),
        "JSON" | "JSONB" => row.try_get::<Value, _>(index)?,
        "TIMESTAMPTZ" => Value::String(
            row.try_get::<chrono::DateTime<chrono::Utc>, _>(index)?
                .to_rfc3339(),
        ),
        "TIMESTAMP" => Value::String(row.try_get::<chrono::NaiveDateTime, _>(index)?.to_string()),
        "DATE" => Value::String(row.try_get::<chrono::NaiveDate, _>(index)?.to_string()),
        "TIME" => Value::String(row.try_get::<chrono::NaiveTime, _>(index)?.to_string()),
        _ => row
            .try_get::<String, _>(index)
            .map(Value::String)
            .unwrap_or(Value::Null),
    };

    Ok(value)
}
