use ferrous_zone_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{DnsResponder, RecordRepository};

/// How a single question was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Answered from the store with this many records
    Local(usize),
    /// Delegated to the fallback resolver
    Fallback,
}

/// Per-question resolution: exact store answers first, fallback otherwise.
///
/// The store lock is only held inside the repository calls, so a slow
/// upstream never blocks management writes.
pub struct ResolveQueryUseCase<M: Send + 'static> {
    repo: Arc<dyn RecordRepository>,
    responder: Arc<dyn DnsResponder<M>>,
}

impl<M: Send + 'static> ResolveQueryUseCase<M> {
    pub fn new(repo: Arc<dyn RecordRepository>, responder: Arc<dyn DnsResponder<M>>) -> Self {
        Self { repo, responder }
    }

    #[instrument(skip(self, query, message), fields(domain = %query.domain, record_type = ?query.record_type))]
    pub async fn execute(
        &self,
        query: &DnsQuery,
        message: &mut M,
    ) -> Result<Resolution, DomainError> {
        match query.record_type {
            Some(record_type) if !record_type.is_any() => {
                self.resolve_typed(query, record_type, message).await
            }
            _ => self.resolve_any(query, message).await,
        }
    }

    async fn resolve_any(
        &self,
        query: &DnsQuery,
        message: &mut M,
    ) -> Result<Resolution, DomainError> {
        let records = self.repo.filter_by_domain(&query.domain).await?;

        if records.is_empty() {
            debug!("No local records, delegating ANY query");
            let upstream = DnsQuery::new(Arc::clone(&query.domain), RecordType::ANY);
            self.responder.fallback(&upstream, message).await?;
            return Ok(Resolution::Fallback);
        }

        for record in &records {
            self.responder.answer(record, message)?;
        }
        Ok(Resolution::Local(records.len()))
    }

    async fn resolve_typed(
        &self,
        query: &DnsQuery,
        record_type: RecordType,
        message: &mut M,
    ) -> Result<Resolution, DomainError> {
        let found = match self
            .repo
            .find_by_type_and_domain(record_type, &query.domain)
            .await
        {
            Ok(record) if record.is_answerable() => Some(record),
            Ok(_) | Err(DomainError::DoesNotExist { .. }) => None,
            Err(e) => return Err(e),
        };

        match found {
            Some(record) => {
                self.responder.answer(&record, message)?;
                Ok(Resolution::Local(1))
            }
            None => {
                debug!(record_type = %record_type, "No local record, delegating");
                self.responder.fallback(query, message).await?;
                Ok(Resolution::Fallback)
            }
        }
    }
}
