pub mod chat_settings;
pub mod configuration;
pub mod connection_settings;
pub mod environment;
pub mod error;
pub mod to_runtime_configuration;
pub mod values;
pub mod version1;

pub use configuration::Configuration;
pub use to_runtime_configuration::make_runtime_configuration;
pub use values::ConnectionUri;
pub use version1::{parse_configuration, ParsedConfiguration, CONFIGURATION_FILENAME};
