use serde::{Deserialize, Serialize};

/// Listener state returned by the DNS control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsServerResponse {
    pub running: bool,
    pub configured_address: String,
    pub local_address: Option<String>,
}
