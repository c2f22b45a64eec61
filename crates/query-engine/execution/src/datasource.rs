//! The data source boundary.

use async_trait::async_trait;

use query_engine_metadata::metadata::SchemaDescription;
use query_engine_sql::sql::string::SQL;

use crate::error::Error;
use crate::introspection;
use crate::metrics::Metrics;
use crate::query::{self, Rows};

/// The data source boundary: schema discovery plus query execution. The
/// orchestrator only ever sees this trait, which keeps the conversation
/// protocol testable without a running database.
#[async_trait]
pub trait Datasource: Send + Sync {
    /// Take a fresh schema snapshot. Degrades instead of failing.
    async fn describe_schema(&self) -> SchemaDescription;

    /// Run a synthesized query.
    async fn execute(&self, query: &SQL) -> Result<Rows, Error>;
}

/// Production datasource over a Postgres connection pool.
#[derive(Clone)]
pub struct PostgresDatasource {
    pool: sqlx::PgPool,
    metrics: Metrics,
}

impl PostgresDatasource {
    pub fn new(pool: sqlx::PgPool, metrics: Metrics) -> Self {
        PostgresDatasource { pool, metrics }
    }
}

#[async_trait]
impl Datasource for PostgresDatasource {
    async fn describe_schema(&self) -> SchemaDescription {
        let schema = introspection::describe(&self.pool).await;
        if schema.error.is_some() {
            self.metrics.schema_error_total.inc();
        }
        schema
    }

    async fn execute(&self, query: &SQL) -> Result<Rows, Error> {
        match query::execute(&self.pool, query).await {
            Ok(rows) => {
                self.metrics.lookup_total.inc();
                Ok(rows)
            }
            Err(err) => {
                self.metrics.lookup_error_total.inc();
                Err(err)
            }
        }
    }
}
