//! Errors from the chat-completion boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid chat API url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unable to build the chat HTTP client: {0}")]
    Initialization(reqwest::Error),
    #[error("error calling the chat API: {0}")]
    Request(reqwest::Error),
    #[error("chat API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed chat API response: {0}")]
    MalformedResponse(String),
}
