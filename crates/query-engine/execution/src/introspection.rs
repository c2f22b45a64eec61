//! Per-request schema discovery against the live database.

use sqlx::Row;

use query_engine_metadata::metadata::{ColumnInfo, SchemaDescription, TableInfo};

use crate::error::Error;

const TABLES_QUERY: &str = "SELECT table_name::text AS table_name \
     FROM information_schema.tables WHERE table_schema = 'public'";

const COLUMNS_QUERY: &str = "SELECT column_name::text AS column_name, data_type::text AS data_type \
     FROM information_schema.columns WHERE table_name = $1";

/// Describe every table and its columns in the public schema, in discovery
/// order. Never fails: a database error degrades to a description whose
/// rendering is only an error note, so prompting always has schema context.
pub async fn describe(pool: &sqlx::PgPool) -> SchemaDescription {
    match describe_tables(pool).await {
        Ok(tables) => SchemaDescription {
            tables,
            error: None,
        },
        Err(err) => {
            tracing::error!("schema introspection failed: {}", err);
            SchemaDescription::from_error(err.to_string())
        }
    }
}

async fn describe_tables(pool: &sqlx::PgPool) -> Result<Vec<TableInfo>, Error> {
    let mut tables = vec![];

    let table_rows = sqlx::query(TABLES_QUERY).fetch_all(pool).await?;
    for table_row in table_rows {
        let name: String = table_row.try_get("table_name")?;

        let column_rows = sqlx::query(COLUMNS_QUERY)
            .bind(&name)
            .fetch_all(pool)
            .await?;
        let columns = column_rows
            .iter()
            .map(|row| {
                Ok(ColumnInfo {
                    name: row.try_get("column_name")?,
                    data_type: row.try_get("data_type")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        tables.push(TableInfo { name, columns });
    }

    Ok(tables)
}
