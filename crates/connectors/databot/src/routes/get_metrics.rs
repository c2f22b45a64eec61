use axum::extract::State;
use axum::http::StatusCode;
use prometheus::{Encoder, TextEncoder};

use crate::state::ServerState;

pub async fn get_metrics(State(state): State<ServerState>) -> Result<String, StatusCode> {
    let mut buffer = vec![];
    TextEncoder::new()
        .encode(&state.metrics_registry.gather(), &mut buffer)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    String::from_utf8(buffer).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
