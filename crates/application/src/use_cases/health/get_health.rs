use ferrous_zone_domain::{HealthReport, Record, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::{instrument, warn};

use crate::ports::{HealthReporter, RecordRepository};

pub struct GetHealthUseCase {
    repo: Arc<dyn RecordRepository>,
    reporter: Arc<dyn HealthReporter>,
    dns_address: String,
    fallback: Option<String>,
}

impl GetHealthUseCase {
    pub fn new(
        repo: Arc<dyn RecordRepository>,
        reporter: Arc<dyn HealthReporter>,
        dns_address: impl Into<String>,
        fallback: Option<String>,
    ) -> Self {
        Self {
            repo,
            reporter,
            dns_address: dns_address.into(),
            fallback,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> HealthReport {
        let started = Instant::now();
        let listed = self.repo.list().await;
        let elapsed = started.elapsed();

        let (count, probe) = match listed {
            Ok(records) => (Some(records.len()), representative(records)),
            Err(e) => {
                warn!(error = %e, "Store listing failed during health check");
                (None, None)
            }
        };

        let store = self.reporter.store(count, elapsed);
        let dns = self
            .reporter
            .dns(&self.dns_address, self.fallback.as_deref(), probe.as_ref())
            .await;

        self.reporter.merge(store, dns)
    }
}

/// Prefer an address record so the local probe exercises the common path.
fn representative(mut records: Vec<Record>) -> Option<Record> {
    records.retain(Record::is_answerable);
    records.sort();
    let position = records
        .iter()
        .position(|r| matches!(r.record_type, RecordType::A | RecordType::AAAA))
        .unwrap_or(0);
    (position < records.len()).then(|| records.swap_remove(position))
}
