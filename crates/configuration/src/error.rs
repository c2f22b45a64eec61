//! Errors that occur during the parsing of the configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The errors that can arise while reading the configuration from disk.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path} ({line}:{column}): {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version {0}, expected 1")]
    UnsupportedVersion(u32),
    #[error("{0}")]
    IoErrorButStringified(String),
    #[error("error processing configuration: {0}")]
    IoError(#[from] std::io::Error),
}

/// The errors that can arise while elaborating the runtime configuration.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("missing environment variable when processing configuration: {message}")]
    MissingEnvironmentVariable { message: String },
}
