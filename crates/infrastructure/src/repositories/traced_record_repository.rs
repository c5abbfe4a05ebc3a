use async_trait::async_trait;
use ferrous_zone_application::ports::RecordRepository;
use ferrous_zone_domain::{DomainError, Record, RecordType};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Tracing decorator for any record store
pub struct TracedRecordRepository {
    inner: Arc<dyn RecordRepository>,
}

impl TracedRecordRepository {
    pub fn new(inner: Arc<dyn RecordRepository>) -> Self {
        Self { inner }
    }
}

fn traced<T>(operation: &'static str, result: Result<T, DomainError>) -> Result<T, DomainError> {
    match &result {
        Ok(_) => debug!(operation, "Store call succeeded"),
        Err(DomainError::DoesNotExist { .. }) => debug!(operation, "Record not found"),
        Err(e) => warn!(operation, error = %e, "Store call failed"),
    }
    result
}

#[async_trait]
impl RecordRepository for TracedRecordRepository {
    #[instrument(name = "store.create", skip_all, fields(count = records.len()))]
    async fn create(&self, records: &[Record]) -> Result<(), DomainError> {
        traced("create", self.inner.create(records).await)
    }

    #[instrument(name = "store.list", skip_all)]
    async fn list(&self) -> Result<Vec<Record>, DomainError> {
        let result = self.inner.list().await;
        if let Ok(records) = &result {
            debug!(count = records.len(), "Listed records");
        }
        traced("list", result)
    }

    #[instrument(name = "store.find", skip(self))]
    async fn find_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<Record, DomainError> {
        traced(
            "find_by_type_and_domain",
            self.inner.find_by_type_and_domain(record_type, domain).await,
        )
    }

    #[instrument(name = "store.filter_by_domain", skip(self))]
    async fn filter_by_domain(&self, domain: &str) -> Result<Vec<Record>, DomainError> {
        traced("filter_by_domain", self.inner.filter_by_domain(domain).await)
    }

    #[instrument(name = "store.filter_by_dest", skip(self))]
    async fn filter_by_dest(&self, address: &str) -> Result<Vec<Record>, DomainError> {
        traced("filter_by_dest", self.inner.filter_by_dest(address).await)
    }

    #[instrument(name = "store.update", skip(self, record), fields(domain = %record.domain))]
    async fn update(&self, target: &str, record: &Record) -> Result<(), DomainError> {
        traced("update", self.inner.update(target, record).await)
    }

    #[instrument(name = "store.delete_by_address", skip(self))]
    async fn delete_by_address(&self, address: &str) -> Result<(), DomainError> {
        traced("delete_by_address", self.inner.delete_by_address(address).await)
    }

    #[instrument(name = "store.delete_by_domain", skip(self))]
    async fn delete_by_domain(&self, domain: &str) -> Result<(), DomainError> {
        traced("delete_by_domain", self.inner.delete_by_domain(domain).await)
    }

    #[instrument(name = "store.delete_by_type_and_domain", skip(self))]
    async fn delete_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<(), DomainError> {
        traced(
            "delete_by_type_and_domain",
            self.inner
                .delete_by_type_and_domain(record_type, domain)
                .await,
        )
    }
}
