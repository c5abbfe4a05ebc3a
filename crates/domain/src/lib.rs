//! Ferrous Zone Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod health;

pub use config::{CliOverrides, Config, ConfigError, StoreBackend};
pub use dns_query::DnsQuery;
pub use dns_record::{Record, RecordFilter, RecordType, RecordUpdate};
pub use errors::DomainError;
pub use health::{DnsReport, HealthReport, HealthStatus, StoreReport};
