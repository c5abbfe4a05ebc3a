//! Ferrous Zone Application Layer
//!
//! Ports consumed by the use cases and implemented in infrastructure.

pub mod ports;
pub mod use_cases;
