//! Version 1 of the configuration format.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::chat_settings::ChatModelSettings;
use crate::connection_settings::DatabaseConnectionSettings;
use crate::error::ParseConfigurationError;
use crate::values::PoolSettings;

const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";

/// Initial configuration: just enough to connect to a database and a chat
/// model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    // Which version of the configuration format are we using
    pub version: u32,
    pub connection_settings: DatabaseConnectionSettings,
    #[serde(default)]
    pub chat: ChatModelSettings,
    #[serde(skip_serializing_if = "PoolSettings::is_default")]
    #[serde(default)]
    pub pool_settings: PoolSettings,
}

impl ParsedConfiguration {
    pub fn empty() -> Self {
        Self {
            version: CURRENT_VERSION,
            connection_settings: DatabaseConnectionSettings::empty(),
            chat: ChatModelSettings::default(),
            pool_settings: PoolSettings::default(),
        }
    }
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if parsed_config.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion(
            parsed_config.version,
        ));
    }

    tracing::debug!("parsed configuration from {}", configuration_file.display());
    Ok(parsed_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;
    use crate::make_runtime_configuration;
    use crate::values::{ConnectionUri, Secret};

    async fn parse_str(contents: &str) -> Result<ParsedConfiguration, ParseConfigurationError> {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIGURATION_FILENAME), contents).unwrap();
        parse_configuration(dir.path()).await
    }

    #[tokio::test]
    async fn parses_a_minimal_configuration_with_defaults() {
        let parsed = parse_str(
            r#"{
                "version": 1,
                "connectionSettings": {
                    "connectionUri": {"variable": "DATABOT_DATABASE_URL"}
                }
            }"#,
        )
        .await
        .unwrap();

        assert_eq!(parsed.chat, ChatModelSettings::default());
        assert_eq!(parsed.chat.url.as_str(), "http://localhost:11434/");
        assert_eq!(parsed.chat.model, "llama3.2");
        assert!(parsed.pool_settings.is_default());
    }

    #[tokio::test]
    async fn rejects_unknown_versions() {
        let result = parse_str(
            r#"{
                "version": 2,
                "connectionSettings": {"connectionUri": "postgresql://localhost"}
            }"#,
        )
        .await;
        assert!(matches!(
            result,
            Err(ParseConfigurationError::UnsupportedVersion(2))
        ));
    }

    #[tokio::test]
    async fn resolves_secrets_from_the_environment() {
        let parsed = parse_str(
            r#"{
                "version": 1,
                "connectionSettings": {
                    "connectionUri": {"variable": "DATABOT_DATABASE_URL"}
                },
                "chat": {"url": "http://ollama.internal:11434", "model": "mistral"}
            }"#,
        )
        .await
        .unwrap();

        let environment = FixedEnvironment::new(
            [(
                "DATABOT_DATABASE_URL".into(),
                "postgresql://user:pw@localhost/app".to_string(),
            )]
            .into(),
        );
        let configuration = make_runtime_configuration(parsed, environment).unwrap();
        assert_eq!(configuration.connection_uri, "postgresql://user:pw@localhost/app");
        assert_eq!(configuration.chat.model, "mistral");
    }

    #[tokio::test]
    async fn inline_connection_uris_need_no_environment() {
        let parsed = parse_str(
            r#"{
                "version": 1,
                "connectionSettings": {"connectionUri": "postgresql://localhost/app"}
            }"#,
        )
        .await
        .unwrap();

        assert_eq!(
            parsed.connection_settings.connection_uri,
            ConnectionUri(Secret::Plain("postgresql://localhost/app".to_string()))
        );
    }
}
