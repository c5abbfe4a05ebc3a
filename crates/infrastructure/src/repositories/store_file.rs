//! On-disk representation of the record store.
//!
//! Records are grouped by type, then by address, so every domain that shares
//! an address within a type is listed under one entry:
//!
//! ```yaml
//! types:
//!   - type: A
//!     records:
//!       - address: 10.0.0.1
//!         domains: [nas.lan, printer.lan]
//! ```

use super::memory_record_repository::RecordIndex;
use ferrous_zone_domain::{DomainError, RecordType, StoreBackend};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    #[serde(default)]
    pub records: Vec<AddressEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    pub address: String,
    #[serde(default)]
    pub domains: Vec<String>,
}

impl StoreFile {
    /// Group the index, sorting types, addresses and domains.
    pub fn from_index(index: &RecordIndex) -> Self {
        let mut grouped: BTreeMap<RecordType, BTreeMap<&str, BTreeSet<&str>>> = BTreeMap::new();
        for (record_type, names) in index {
            for (domain, address) in names {
                grouped
                    .entry(*record_type)
                    .or_default()
                    .entry(address.as_str())
                    .or_default()
                    .insert(domain.as_str());
            }
        }

        let types = grouped
            .into_iter()
            .map(|(record_type, addresses)| TypeEntry {
                record_type,
                records: addresses
                    .into_iter()
                    .map(|(address, domains)| AddressEntry {
                        address: address.to_string(),
                        domains: domains.into_iter().map(str::to_string).collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { types }
    }

    /// Flatten back into the canonical index. Later entries win when a
    /// domain is listed twice under one type.
    pub fn into_index(self) -> RecordIndex {
        let mut index = RecordIndex::new();
        for entry in self.types {
            let names = index.entry(entry.record_type).or_default();
            for record in entry.records {
                for domain in record.domains {
                    names.insert(domain, record.address.clone());
                }
            }
        }
        index.retain(|_, names| !names.is_empty());
        index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFileFormat {
    Json,
    Yaml,
}

impl StoreFileFormat {
    /// Serialization format for a durable backend; `None` for memory.
    pub fn for_backend(backend: StoreBackend) -> Option<Self> {
        match backend {
            StoreBackend::Memory => None,
            StoreBackend::JsonFile => Some(Self::Json),
            StoreBackend::YamlFile => Some(Self::Yaml),
        }
    }

    pub fn encode(&self, file: &StoreFile) -> Result<Vec<u8>, DomainError> {
        match self {
            Self::Json => serde_json::to_vec_pretty(file)
                .map_err(|e| DomainError::Sync(format!("Failed to encode JSON: {}", e))),
            Self::Yaml => serde_yaml::to_string(file)
                .map(String::into_bytes)
                .map_err(|e| DomainError::Sync(format!("Failed to encode YAML: {}", e))),
        }
    }

    /// Blank input decodes to an empty store.
    pub fn decode(&self, bytes: &[u8]) -> Result<StoreFile, DomainError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(StoreFile::default());
        }
        match self {
            Self::Json => serde_json::from_slice(bytes)
                .map_err(|e| DomainError::IoError(format!("Invalid JSON store file: {}", e))),
            Self::Yaml => serde_yaml::from_slice(bytes)
                .map_err(|e| DomainError::IoError(format!("Invalid YAML store file: {}", e))),
        }
    }
}
