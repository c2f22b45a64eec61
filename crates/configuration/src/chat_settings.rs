//! Settings for the chat model backing the assistant.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_CHAT_URL: &str = "http://localhost:11434";
pub const DEFAULT_CHAT_MODEL: &str = "llama3.2";

/// Where to reach the chat model and which model to ask for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatModelSettings {
    /// Base url of an Ollama-compatible chat API.
    #[serde(default = "default_chat_url")]
    pub url: Url,
    /// The model asked to translate questions and phrase answers.
    #[serde(default = "default_chat_model")]
    pub model: String,
}

impl Default for ChatModelSettings {
    fn default() -> Self {
        ChatModelSettings {
            url: default_chat_url(),
            model: default_chat_model(),
        }
    }
}

fn default_chat_url() -> Url {
    // the literal always parses
    Url::parse(DEFAULT_CHAT_URL).expect("default chat url")
}

fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}
