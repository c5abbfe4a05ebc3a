use super::RecordType;
use serde::{Deserialize, Serialize};

/// A single (type, domain) → address mapping held by the record store.
///
/// `address` is kept as a string: an IP for `A`/`AAAA`, a target name for
/// `CNAME`/`PTR`/`NS`, free text for `TXT`. The store does not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(rename = "name")]
    pub domain: String,
    pub address: String,
}

impl Record {
    pub fn new(
        record_type: RecordType,
        domain: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            record_type,
            domain: domain.into(),
            address: address.into(),
        }
    }

    /// A record can only be served when it points somewhere.
    pub fn is_answerable(&self) -> bool {
        !self.address.is_empty()
    }
}
