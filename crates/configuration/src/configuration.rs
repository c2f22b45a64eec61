//! Configuration for the service.

use crate::chat_settings::ChatModelSettings;
use crate::values::PoolSettings;

/// The 'Configuration' type collects all the information necessary to serve
/// queries at runtime.
///
/// 'ParsedConfiguration' deals with the serialized format; values of this
/// type are produced from it using 'make_runtime_configuration', which is
/// where environment-variable secrets get resolved.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub connection_uri: String,
    pub chat: ChatModelSettings,
    pub pool_settings: PoolSettings,
}
