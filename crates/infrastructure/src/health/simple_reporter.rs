use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use ferrous_zone_application::ports::HealthReporter;
use ferrous_zone_domain::config::dns::parse_socket_addr;
use ferrous_zone_domain::{
    DnsReport, DomainError, HealthReport, HealthStatus, Record, RecordType, StoreReport,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::{Duration, Instant};
use tracing::debug;

const STORE_HEALTHY: Duration = Duration::from_millis(100);
const STORE_DEGRADED: Duration = Duration::from_secs(1);
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);
const PROBE_NAME: &str = "example.com";

/// Threshold-based reporter that probes DNS over UDP.
pub struct SimpleHealthReporter {
    probe_timeout: Duration,
}

impl Default for SimpleHealthReporter {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

impl SimpleHealthReporter {
    pub fn new(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }

    /// Time one query round trip; `None` when the server did not answer.
    async fn probe(&self, server: SocketAddr, name: &str, record_type: RecordType) -> Option<u64> {
        let started = Instant::now();
        let result = async {
            let (id, bytes) = MessageBuilder::build_query(name, record_type)?;
            let raw = UdpTransport::new(server)
                .send(&bytes, id, self.probe_timeout)
                .await?;
            ResponseParser::parse(&raw, id)
        }
        .await;

        match result {
            Ok(_) => Some(started.elapsed().as_millis() as u64),
            Err(e) => {
                debug!(server = %server, probe_name = name, error = %e, "Health probe failed");
                None
            }
        }
    }
}

/// Wildcard listen addresses are probed on loopback.
fn local_target(address: &str) -> Result<SocketAddr, DomainError> {
    let mut addr =
        parse_socket_addr(address).map_err(|e| DomainError::InvalidAddress(e.to_string()))?;
    if addr.ip().is_unspecified() {
        let loopback = match addr.ip() {
            IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
        };
        addr.set_ip(loopback);
    }
    Ok(addr)
}

#[async_trait]
impl HealthReporter for SimpleHealthReporter {
    fn store(&self, records: Option<usize>, elapsed: Duration) -> StoreReport {
        let status = match records {
            None => HealthStatus::Unhealthy,
            Some(_) if elapsed < STORE_HEALTHY => HealthStatus::Healthy,
            Some(_) if elapsed < STORE_DEGRADED => HealthStatus::Degraded,
            Some(_) => HealthStatus::Unhealthy,
        };

        StoreReport {
            status,
            records: records.unwrap_or(0),
            query_time_ms: elapsed.as_millis() as u64,
        }
    }

    async fn dns(
        &self,
        address: &str,
        fallback: Option<&str>,
        probe: Option<&Record>,
    ) -> DnsReport {
        let (name, record_type) = probe
            .map(|r| (r.domain.as_str(), r.record_type))
            .unwrap_or((PROBE_NAME, RecordType::A));

        let local_query_ms = match local_target(address) {
            Ok(target) => self.probe(target, name, record_type).await,
            Err(_) => None,
        };

        let fallback_query_ms = match fallback.map(parse_socket_addr) {
            Some(Ok(target)) => self.probe(target, PROBE_NAME, RecordType::A).await,
            _ => None,
        };

        let status = match (local_query_ms.is_some(), fallback_query_ms.is_some()) {
            (true, true) => HealthStatus::Healthy,
            (false, false) => HealthStatus::Unhealthy,
            _ => HealthStatus::Degraded,
        };

        DnsReport {
            status,
            address: address.to_string(),
            fallback: fallback.map(str::to_string),
            local_query_ms,
            fallback_query_ms,
        }
    }

    fn merge(&self, store: StoreReport, dns: DnsReport) -> HealthReport {
        HealthReport {
            status: store.status.worst(dns.status),
            store,
            dns,
        }
    }
}
