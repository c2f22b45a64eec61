//! Transform a 'ParsedConfiguration' into a runtime 'Configuration'.

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::values::{ConnectionUri, Secret};
use crate::version1::ParsedConfiguration;

/// Resolve the secrets of a parsed configuration against the environment,
/// yielding the configuration the service runs with.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let connection_uri = match parsed_config.connection_settings.connection_uri {
        ConnectionUri(Secret::Plain(uri)) => uri,
        ConnectionUri(Secret::FromEnvironment { variable }) => {
            environment.read(&variable).map_err(|err| {
                MakeRuntimeConfigurationError::MissingEnvironmentVariable {
                    message: err.to_string(),
                }
            })?
        }
    };

    Ok(Configuration {
        connection_uri,
        chat: parsed_config.chat,
        pool_settings: parsed_config.pool_settings,
    })
}
