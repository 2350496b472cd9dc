use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading handler options
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required option '{key}' is not set")]
    MissingProperty { key: &'static str },

    #[error("Option '{key}' has an invalid value: {message}")]
    InvalidProperty { key: &'static str, message: String },

    #[error("Failed to read options file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Options file {path} is not a flat JSON object: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
