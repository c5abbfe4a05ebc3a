use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Record does not exist: {record_type} {domain}")]
    DoesNotExist { record_type: String, domain: String },

    #[error("No records in the store for {0}")]
    ZeroRecords(String),

    #[error("No domain name provided")]
    NoName,

    #[error("No DNS record type provided")]
    NoType,

    #[error("No IP address provided")]
    NoAddr,

    #[error("Record cannot be empty")]
    EmptyRecord,

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid address for record: {0}")]
    InvalidAddress(String),

    #[error("Failed to sync store to file: {0}")]
    Sync(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unimplemented DNS record store")]
    Unimplemented,

    #[error("Fallback resolution failed: {0}")]
    Fallback(String),

    #[error("DNS server error: {0}")]
    Server(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn does_not_exist(record_type: impl ToString, domain: impl Into<String>) -> Self {
        DomainError::DoesNotExist {
            record_type: record_type.to_string(),
            domain: domain.into(),
        }
    }

    /// Errors caused by an incomplete request rather than by the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::NoName
                | DomainError::NoType
                | DomainError::NoAddr
                | DomainError::EmptyRecord
                | DomainError::InvalidRecordType(_)
                | DomainError::InvalidDomainName(_)
                | DomainError::InvalidAddress(_)
        )
    }
}
