use async_trait::async_trait;
use ferrous_zone_domain::{DnsQuery, DomainError, Record};

/// Protocol-side collaborator of the resolution use case.
///
/// `M` is the outgoing answer accumulator owned by the protocol layer. The
/// use case never inspects it; it only decides which of the two methods
/// writes into it.
#[async_trait]
pub trait DnsResponder<M: Send>: Send + Sync {
    /// Append an answer built from a stored record.
    fn answer(&self, record: &Record, message: &mut M) -> Result<(), DomainError>;

    /// Resolve `query` upstream and write the result into `message`.
    async fn fallback(&self, query: &DnsQuery, message: &mut M) -> Result<(), DomainError>;
}
