use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record store backend selection.
///
/// Unknown names are rejected instead of falling back to a default, so a
/// typo in the config file cannot silently turn a durable store volatile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum StoreBackend {
    #[default]
    Memory,
    JsonFile,
    YamlFile,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::JsonFile => "json",
            StoreBackend::YamlFile => "yaml",
        }
    }

    pub fn is_durable(&self) -> bool {
        !matches!(self, StoreBackend::Memory)
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "memmap" | "in-memory" => Ok(StoreBackend::Memory),
            "json" | "jsonfile" => Ok(StoreBackend::JsonFile),
            "yaml" | "yamlfile" => Ok(StoreBackend::YamlFile),
            _ => Err(ConfigError::UnknownStoreBackend(s.to_string())),
        }
    }
}

impl TryFrom<String> for StoreBackend {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StoreBackend> for String {
    fn from(value: StoreBackend) -> Self {
        value.as_str().to_string()
    }
}

/// Record store configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Backing file for the json and yaml backends
    #[serde(default)]
    pub path: Option<String>,
}
