use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::conversation::Conversation;
use crate::error::ServerError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Answer a natural-language query.
pub async fn post_query(
    State(state): State<ServerState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ServerError> {
    tracing::info!("handling query: {}", request.query);

    let conversation = Conversation::new(&*state.chat, &*state.datasource);
    let response = conversation.respond(&request.query).await?;

    // assuming the conversation succeeded, increment counter
    state.metrics.query_total.inc();

    Ok(Json(QueryResponse { response }))
}
