use async_trait::async_trait;
use ferrous_zone_domain::{DomainError, Record, RecordFilter, RecordType};

/// Repository interface for the record store.
///
/// The store is indexed by (type, domain): within one type a domain maps to
/// at most one address, while many domains may share an address.
/// Implementations hand out copies and never references into their state.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Upserts every record, overwriting the address of an existing
    /// (type, domain) pair.
    ///
    /// # Errors
    ///
    /// * `DomainError::Sync` - If a durable backend failed to persist the change
    async fn create(&self, records: &[Record]) -> Result<(), DomainError>;

    /// Returns all records in no particular order.
    async fn list(&self) -> Result<Vec<Record>, DomainError>;

    /// Exact lookup of one (type, domain) pair.
    ///
    /// # Errors
    ///
    /// * `DomainError::DoesNotExist` - If the type or the domain under it is absent
    async fn find_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<Record, DomainError>;

    /// All records for `domain` across every type; empty when none match.
    async fn filter_by_domain(&self, domain: &str) -> Result<Vec<Record>, DomainError>;

    /// All records pointing at `address`; empty when none match.
    async fn filter_by_dest(&self, address: &str) -> Result<Vec<Record>, DomainError>;

    /// Replaces the entry stored at (`record.record_type`, `target`).
    ///
    /// When `record.domain` differs from `target` the old key is removed and
    /// the record is inserted under its new domain.
    ///
    /// # Errors
    ///
    /// * `DomainError::DoesNotExist` - If (`record.record_type`, `target`) is absent
    /// * `DomainError::Sync` - If a durable backend failed to persist the change
    async fn update(&self, target: &str, record: &Record) -> Result<(), DomainError>;

    /// Removes every record pointing at `address`. Missing matches are a no-op.
    async fn delete_by_address(&self, address: &str) -> Result<(), DomainError>;

    /// Removes every type registered for `domain`. Missing matches are a no-op.
    async fn delete_by_domain(&self, domain: &str) -> Result<(), DomainError>;

    /// Removes exactly one (type, domain) entry. Missing matches are a no-op.
    async fn delete_by_type_and_domain(
        &self,
        record_type: RecordType,
        domain: &str,
    ) -> Result<(), DomainError>;

    async fn delete(&self, filter: &RecordFilter) -> Result<(), DomainError> {
        match filter {
            RecordFilter::Address(address) => self.delete_by_address(address).await,
            RecordFilter::Domain(domain) => self.delete_by_domain(domain).await,
            RecordFilter::TypeAndDomain(record_type, domain) => {
                self.delete_by_type_and_domain(*record_type, domain).await
            }
        }
    }
}
