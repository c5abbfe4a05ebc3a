//! Ferrous Zone Infrastructure Layer
//!
//! Store backends, the hickory-proto wire glue and the UDP listener.

pub mod dns;
pub mod health;
pub mod repositories;
