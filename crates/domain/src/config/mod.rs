//! Configuration module for Ferrous Zone
//!
//! This module contains all configuration structures organized by domain:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Management API port and binding
//! - `dns`: DNS listener and fallback settings
//! - `store`: Record store backend selection
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod store;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use store::{StoreBackend, StoreConfig};
