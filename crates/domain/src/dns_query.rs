use crate::dns_record::RecordType;
use std::sync::Arc;

/// A single question handed to the resolution service.
///
/// `record_type` is `None` when the question carried no usable type; it is
/// then treated the same as `ANY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: Option<RecordType>,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type: Some(record_type),
        }
    }

    pub fn untyped(domain: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
            record_type: None,
        }
    }

    /// Build a query from a wire name, dropping the root label's trailing dot.
    pub fn from_wire_name(name: &str, record_type: Option<RecordType>) -> Self {
        let domain = name.strip_suffix('.').unwrap_or(name);
        Self {
            domain: Arc::from(domain),
            record_type,
        }
    }

    pub fn is_any(&self) -> bool {
        self.record_type.is_none_or(|t| t.is_any())
    }
}
