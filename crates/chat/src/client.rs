//! HTTP client for an Ollama-compatible chat API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::error::ChatError;
use crate::message::Message;

/// The text generator boundary: an ordered message sequence in, a single
/// completion string out. Stateless per call: callers resend the whole
/// history each turn.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError>;
}

/// Bound on a single chat round trip. Local models can take a while to
/// produce a full reply.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat client for the Ollama `/api/chat` endpoint.
pub struct OllamaClient {
    endpoint: Url,
    model: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaClient {
    /// Create a client for the given base url (e.g. `http://localhost:11434`)
    /// and model name.
    pub fn new(url: &Url, model: String) -> Result<Self, ChatError> {
        let endpoint = url.join("api/chat")?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ChatError::Initialization)?;
        Ok(OllamaClient {
            endpoint,
            model,
            client,
        })
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({
                "model": self.model,
                "messages": messages,
                "stream": false,
            }))
            .send()
            .await
            .map_err(ChatError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(ChatError::Request)?;

        if !status.is_success() {
            return Err(ChatError::Api { status, body });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|err| ChatError::MalformedResponse(err.to_string()))?;

        tracing::debug!("chat reply: {} bytes", parsed.message.content.len());
        Ok(parsed.message.content)
    }
}
