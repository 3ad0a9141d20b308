use std::path::PathBuf;

use thiserror::Error;

use super::ValidationError;

/// Problems with a `ratelimit-probe` config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config file '{path}' is not valid TOML: {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Config file '{path}' is not valid JSON: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config file extension '.{ext}' is not supported; use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Config file needs a .toml or .json extension.")]
    MissingExtension,
    #[error("Config value '{field}' must be at least 1: {source}")]
    FieldMustBePositive {
        field: &'static str,
        #[source]
        source: ValidationError,
    },
    #[error("Config value 'timeout' is invalid: {source}")]
    InvalidTimeout {
        #[source]
        source: ValidationError,
    },
}
