//! Transient state used by the service.
//!
//! This is initialized on startup.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use databot_chat::{ChatClient, ChatError, OllamaClient};
use databot_configuration::Configuration;
use query_engine_execution::datasource::{Datasource, PostgresDatasource};
use query_engine_execution::metrics::{self, Metrics};

/// State for the service.
#[derive(Clone)]
pub struct ServerState {
    pub datasource: Arc<dyn Datasource>,
    pub chat: Arc<dyn ChatClient>,
    pub metrics: Metrics,
    pub metrics_registry: Arc<prometheus::Registry>,
}

/// Create a connection pool and chat client and wrap them in server state.
///
/// The pool connects lazily: the service starts (and stays diagnosable over
/// `/health` and `/metrics`) even while the database is unreachable.
pub async fn create_state(configuration: &Configuration) -> Result<ServerState, InitializationError> {
    let mut metrics_registry = prometheus::Registry::new();
    let metrics =
        metrics::initialise_metrics(&mut metrics_registry).map_err(InitializationError::Metrics)?;

    let pool_settings = &configuration.pool_settings;
    let pool = PgPoolOptions::new()
        .max_connections(pool_settings.max_connections)
        .acquire_timeout(Duration::from_secs(pool_settings.pool_timeout))
        .idle_timeout(pool_settings.idle_timeout.map(Duration::from_secs))
        .max_lifetime(pool_settings.connection_lifetime.map(Duration::from_secs))
        .connect_lazy(&configuration.connection_uri)
        .map_err(InitializationError::UnableToCreatePool)?;

    let chat = OllamaClient::new(&configuration.chat.url, configuration.chat.model.clone())
        .map_err(InitializationError::ChatClient)?;

    Ok(ServerState {
        datasource: Arc::new(PostgresDatasource::new(pool, metrics.clone())),
        chat: Arc::new(chat),
        metrics,
        metrics_registry: Arc::new(metrics_registry),
    })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("unable to initialize connection pool: {0}")]
    UnableToCreatePool(sqlx::Error),
    #[error("error initializing metrics: {0}")]
    Metrics(prometheus::Error),
    #[error("error initializing the chat client: {0}")]
    ChatClient(ChatError),
}
