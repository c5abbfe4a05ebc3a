use async_trait::async_trait;
use ferrous_zone_application::ports::RecordRepository;
use ferrous_zone_domain::{DomainError, Record, RecordType};

/// Placeholder store used when no backend was wired; every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedRecordRepository;

#[async_trait]
impl RecordRepository for UnimplementedRecordRepository {
    async fn create(&self, _records: &[Record]) -> Result<(), DomainError> {
        Err(DomainError::Unimplemented)
    }

    async fn list(&self) -> Result<Vec<Record>, DomainError> {
        Err(DomainError::Unimplemented)
    }

    async fn find_by_type_and_domain(
        &self,
        _record_type: RecordType,
        _domain: &str,
    ) -> Result<Record, DomainError> {
        Err(DomainError::Unimplemented)
    }

    async fn filter_by_domain(&self, _domain: &str) -> Result<Vec<Record>, DomainError> {
        Err(DomainError::Unimplemented)
    }

    async fn filter_by_dest(&self, _address: &str) -> Result<Vec<Record>, DomainError> {
        Err(DomainError::Unimplemented)
    }

    async fn update(&self, _target: &str, _record: &Record) -> Result<(), DomainError> {
        Err(DomainError::Unimplemented)
    }

    async fn delete_by_address(&self, _address: &str) -> Result<(), DomainError> {
        Err(DomainError::Unimplemented)
    }

    async fn delete_by_domain(&self, _domain: &str) -> Result<(), DomainError> {
        Err(DomainError::Unimplemented)
    }

    async fn delete_by_type_and_domain(
        &self,
        _record_type: RecordType,
        _domain: &str,
    ) -> Result<(), DomainError> {
        Err(DomainError::Unimplemented)
    }
}
