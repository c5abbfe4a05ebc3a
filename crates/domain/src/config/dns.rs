use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

const DEFAULT_DNS_PORT: u16 = 53;

/// DNS listener and fallback configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// UDP listen address (default: "0.0.0.0:53")
    #[serde(default = "default_address")]
    pub address: String,

    /// Comma-separated upstream servers used when the store has no answer.
    /// The first entry is the primary one reported by health checks.
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Upstream query timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// TTL attached to answers built from the store
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Start the DNS listener together with the management API
    #[serde(default = "default_true")]
    pub autostart: bool,
}

impl DnsConfig {
    /// Fallback servers in configured order, blanks removed
    pub fn fallback_servers(&self) -> Vec<String> {
        self.fallback
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn primary_fallback(&self) -> Option<String> {
        self.fallback_servers().into_iter().next()
    }

    /// Resolve fallback servers to socket addresses, defaulting to port 53.
    pub fn fallback_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.fallback_servers()
            .iter()
            .map(|s| parse_socket_addr(s))
            .collect()
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_socket_addr(&self.address)
    }
}

/// Parse `host:port`, `host`, `[v6]:port` or a bare IPv6 address.
pub fn parse_socket_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    let value = value.trim();
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = value.parse::<std::net::IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }
    if let Some(port) = value.strip_prefix(':') {
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidAddress(value.to_string()))?;
        return Ok(SocketAddr::from(([0, 0, 0, 0], port)));
    }
    Err(ConfigError::InvalidAddress(value.to_string()))
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            fallback: default_fallback(),
            query_timeout: default_query_timeout(),
            ttl: default_ttl(),
            autostart: true,
        }
    }
}

fn default_address() -> String {
    "0.0.0.0:53".to_string()
}

fn default_fallback() -> String {
    "1.1.1.1:53".to_string()
}

fn default_query_timeout() -> u64 {
    2000
}

fn default_ttl() -> u32 {
    300
}

fn default_true() -> bool {
    true
}
