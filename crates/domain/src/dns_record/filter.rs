use super::{Record, RecordType};
use crate::DomainError;
use serde::{Deserialize, Serialize};

/// Deletion scope over the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Every record pointing at this address, across all types
    Address(String),
    /// Every record type registered for this domain
    Domain(String),
    /// Exactly one (type, domain) entry
    TypeAndDomain(RecordType, String),
}

impl RecordFilter {
    /// Build a filter from the optional fields of a management request.
    ///
    /// An address takes precedence over everything else; a domain with a
    /// type narrows to that single entry; a domain alone selects all of
    /// its types. With nothing set the request is rejected.
    pub fn from_parts(
        record_type: Option<RecordType>,
        domain: Option<&str>,
        address: Option<&str>,
    ) -> Result<Self, DomainError> {
        let domain = domain.filter(|d| !d.is_empty());
        let address = address.filter(|a| !a.is_empty());

        match (record_type, domain, address) {
            (_, _, Some(addr)) => Ok(RecordFilter::Address(addr.to_string())),
            (Some(rtype), Some(name), None) => {
                Ok(RecordFilter::TypeAndDomain(rtype, name.to_string()))
            }
            (None, Some(name), None) => Ok(RecordFilter::Domain(name.to_string())),
            (Some(_), None, None) => Err(DomainError::NoName),
            (None, None, None) => Err(DomainError::EmptyRecord),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            RecordFilter::Address(addr) => record.address == *addr,
            RecordFilter::Domain(name) => record.domain == *name,
            RecordFilter::TypeAndDomain(rtype, name) => {
                record.record_type == *rtype && record.domain == *name
            }
        }
    }
}

/// Update payload: the domain currently stored and its replacement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub target: String,
    pub record: Record,
}
