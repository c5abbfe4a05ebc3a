use ferrous_zone_domain::{DomainError, Record, RecordType};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordRepository;

pub struct GetRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl GetRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<Record, DomainError> {
        if domain.trim().is_empty() {
            return Err(DomainError::NoName);
        }
        self.repo.find_by_type_and_domain(record_type, domain).await
    }
}

pub struct GetRecordsByDomainUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl GetRecordsByDomainUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// An unknown domain yields an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<Vec<Record>, DomainError> {
        if domain.trim().is_empty() {
            return Err(DomainError::NoName);
        }
        let mut records = self.repo.filter_by_domain(domain).await?;
        records.sort();
        Ok(records)
    }
}

pub struct GetRecordsByAddressUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl GetRecordsByAddressUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, address: &str) -> Result<Vec<Record>, DomainError> {
        if address.trim().is_empty() {
            return Err(DomainError::NoAddr);
        }
        let mut records = self.repo.filter_by_dest(address).await?;
        if records.is_empty() {
            return Err(DomainError::ZeroRecords(address.to_string()));
        }
        records.sort();
        Ok(records)
    }
}
