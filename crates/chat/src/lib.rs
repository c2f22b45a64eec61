//! The chat-completion boundary: role-tagged messages in, one completion
//! string out. The production client speaks the Ollama chat API.

pub mod client;
pub mod error;
pub mod message;

pub use client::{ChatClient, OllamaClient};
pub use error::ChatError;
pub use message::{Message, Role};
