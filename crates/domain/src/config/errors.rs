use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown store backend: {0} (expected memory, json or yaml)")]
    UnknownStoreBackend(String),

    #[error("Unknown log format: {0} (expected text or json)")]
    UnknownLogFormat(String),

    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    Validation(String),
}
