mod get_health;
mod get_metrics;
mod get_schema;
mod post_query;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::ServerState;

pub use get_health::get_health;
pub use get_metrics::get_metrics;
pub use get_schema::get_schema;
pub use post_query::post_query;

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .route("/metrics", get(get_metrics))
        .route("/schema", get(get_schema))
        .route("/api/query", post(post_query))
        .with_state(state)
}
