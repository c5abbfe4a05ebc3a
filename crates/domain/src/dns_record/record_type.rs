use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types the store can hold and the resolver can answer.
///
/// `ANY` is only meaningful on the query side: it selects every record
/// registered under a domain, regardless of type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    PTR,
    NS,
    TXT,
    ANY,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::PTR => "PTR",
            RecordType::NS => "NS",
            RecordType::TXT => "TXT",
            RecordType::ANY => "ANY",
        }
    }

    /// Convert from wire format number (RFC 1035)
    ///
    /// Returns `None` for types this server does not handle.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            12 => Some(RecordType::PTR),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            255 => Some(RecordType::ANY),
            _ => None,
        }
    }

    /// Convert to wire format number
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::PTR => 12,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::ANY => 255,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, RecordType::ANY)
    }

    /// Returns all record types that can be stored
    pub fn storable() -> [RecordType; 6] {
        [
            RecordType::A,
            RecordType::AAAA,
            RecordType::CNAME,
            RecordType::PTR,
            RecordType::NS,
            RecordType::TXT,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "PTR" => Ok(RecordType::PTR),
            "NS" => Ok(RecordType::NS),
            "TXT" => Ok(RecordType::TXT),
            "ANY" => Ok(RecordType::ANY),
            _ => Err(DomainError::InvalidRecordType(s.to_string())),
        }
    }
}

impl TryFrom<String> for RecordType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}
