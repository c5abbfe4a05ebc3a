use async_trait::async_trait;
use ferrous_zone_application::ports::DnsResponder;
use ferrous_zone_domain::{DnsQuery, DomainError, Record};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Tracing decorator for a responder
pub struct TracedDnsResponder<M: Send + 'static> {
    inner: Arc<dyn DnsResponder<M>>,
}

impl<M: Send + 'static> TracedDnsResponder<M> {
    pub fn new(inner: Arc<dyn DnsResponder<M>>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<M: Send + 'static> DnsResponder<M> for TracedDnsResponder<M> {
    fn answer(&self, record: &Record, message: &mut M) -> Result<(), DomainError> {
        let result = self.inner.answer(record, message);
        match &result {
            Ok(()) => debug!(
                domain = %record.domain,
                record_type = %record.record_type,
                address = %record.address,
                "Answered from store"
            ),
            Err(e) => warn!(domain = %record.domain, error = %e, "Failed to build answer"),
        }
        result
    }

    #[instrument(
        name = "dns.fallback",
        skip_all,
        fields(domain = %query.domain, record_type = ?query.record_type)
    )]
    async fn fallback(&self, query: &DnsQuery, message: &mut M) -> Result<(), DomainError> {
        let result = self.inner.fallback(query, message).await;
        if let Err(e) = &result {
            warn!(error = %e, "Fallback resolution failed");
        }
        result
    }
}
