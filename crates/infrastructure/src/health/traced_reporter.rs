use async_trait::async_trait;
use ferrous_zone_application::ports::HealthReporter;
use ferrous_zone_domain::{DnsReport, HealthReport, HealthStatus, Record, StoreReport};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Tracing decorator for a health reporter
pub struct TracedHealthReporter {
    inner: Arc<dyn HealthReporter>,
}

impl TracedHealthReporter {
    pub fn new(inner: Arc<dyn HealthReporter>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HealthReporter for TracedHealthReporter {
    fn store(&self, records: Option<usize>, elapsed: Duration) -> StoreReport {
        let report = self.inner.store(records, elapsed);
        info!(
            status = %report.status,
            records = report.records,
            query_time_ms = report.query_time_ms,
            "Store health"
        );
        report
    }

    #[instrument(name = "health.dns", skip(self, probe))]
    async fn dns(
        &self,
        address: &str,
        fallback: Option<&str>,
        probe: Option<&Record>,
    ) -> DnsReport {
        let report = self.inner.dns(address, fallback, probe).await;
        info!(
            status = %report.status,
            local_query_ms = ?report.local_query_ms,
            fallback_query_ms = ?report.fallback_query_ms,
            "DNS health"
        );
        report
    }

    fn merge(&self, store: StoreReport, dns: DnsReport) -> HealthReport {
        let report = self.inner.merge(store, dns);
        if report.status != HealthStatus::Healthy {
            warn!(status = %report.status, "Service is not fully healthy");
        }
        report
    }
}
