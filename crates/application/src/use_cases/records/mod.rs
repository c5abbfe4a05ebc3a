mod add_records;
mod delete_records;
mod get_records;
mod list_records;
mod update_record;

pub use add_records::AddRecordsUseCase;
pub use delete_records::DeleteRecordsUseCase;
pub use get_records::{GetRecordUseCase, GetRecordsByAddressUseCase, GetRecordsByDomainUseCase};
pub use list_records::ListRecordsUseCase;
pub use update_record::UpdateRecordUseCase;

use ferrous_zone_domain::{DomainError, Record, RecordType};

/// Field presence checks shared by the write use cases.
pub(crate) fn validate_record(record: &Record) -> Result<(), DomainError> {
    if record.domain.trim().is_empty() && record.address.trim().is_empty() {
        return Err(DomainError::EmptyRecord);
    }
    if record.domain.trim().is_empty() {
        return Err(DomainError::NoName);
    }
    if record.address.trim().is_empty() {
        return Err(DomainError::NoAddr);
    }
    if record.record_type == RecordType::ANY {
        return Err(DomainError::InvalidRecordType(
            RecordType::ANY.to_string(),
        ));
    }
    Ok(())
}
