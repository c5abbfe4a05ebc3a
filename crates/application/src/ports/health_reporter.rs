use async_trait::async_trait;
use ferrous_zone_domain::{DnsReport, HealthReport, Record, StoreReport};
use std::time::Duration;

/// Turns raw observations into health reports.
#[async_trait]
pub trait HealthReporter: Send + Sync {
    /// `records` is `None` when listing the store failed.
    fn store(&self, records: Option<usize>, elapsed: Duration) -> StoreReport;

    /// Probe the local listener at `address` and the primary `fallback`
    /// server. `probe` is a stored record to ask the local listener for.
    async fn dns(&self, address: &str, fallback: Option<&str>, probe: Option<&Record>)
        -> DnsReport;

    fn merge(&self, store: StoreReport, dns: DnsReport) -> HealthReport;
}
