use axum::extract::State;
use axum::Json;

use query_engine_metadata::metadata::SchemaDescription;

use crate::state::ServerState;

/// Expose the current schema snapshot, exactly as prompting sees it.
pub async fn get_schema(State(state): State<ServerState>) -> Json<SchemaDescription> {
    Json(state.datasource.describe_schema().await)
}
