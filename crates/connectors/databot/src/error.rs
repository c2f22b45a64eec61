//! The error surface for requests that fail before any conversational answer
//! exists.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use databot_chat::ChatError;

pub enum ServerError {
    Chat(ChatError),
}

#[derive(Serialize)]
struct JsonErrorResponse {
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Chat(err) => (
                StatusCode::BAD_REQUEST,
                format!("Error processing query: {err}"),
            ),
        };

        tracing::error!("Returning error: {message} with status code: {status}");
        (status, Json(JsonErrorResponse { error: message })).into_response()
    }
}

impl From<ChatError> for ServerError {
    fn from(value: ChatError) -> Self {
        ServerError::Chat(value)
    }
}
