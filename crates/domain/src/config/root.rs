use super::{
    dns::parse_socket_addr, ConfigError, DnsConfig, LoggingConfig, ServerConfig, StoreBackend,
    StoreConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["ferrous-zone.toml", "/etc/ferrous-zone/config.toml"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line; every field wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_address: Option<String>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub fallback: Option<String>,
    pub store_backend: Option<StoreBackend>,
    pub store_path: Option<String>,
    pub log_level: Option<String>,
    pub no_autostart: bool,
}

impl Config {
    /// Load configuration from file and apply CLI overrides.
    ///
    /// Without an explicit path the well-known locations are tried in order;
    /// when none exists the built-in defaults are used.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match DEFAULT_CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
                Some(path) => Self::from_file(path)?,
                None => Config::default(),
            },
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(address) = overrides.dns_address {
            self.dns.address = address;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(fallback) = overrides.fallback {
            self.dns.fallback = fallback;
        }
        if let Some(backend) = overrides.store_backend {
            self.store.backend = backend;
        }
        if let Some(path) = overrides.store_path {
            self.store.path = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.no_autostart {
            self.dns.autostart = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.backend.is_durable()
            && self.store.path.as_deref().is_none_or(|p| p.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "store backend '{}' requires store.path",
                self.store.backend
            )));
        }

        self.dns.listen_addr()?;
        self.dns.fallback_addrs()?;

        format!("{}:{}", self.server.bind_address, self.server.web_port)
            .parse::<std::net::SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddress(self.server.bind_address.clone()))?;

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "dns.query_timeout must be greater than zero".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Web listen address as `bind:port`
    pub fn web_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.web_port)
    }

    pub fn dns_address(&self) -> Result<std::net::SocketAddr, ConfigError> {
        parse_socket_addr(&self.dns.address)
    }
}
