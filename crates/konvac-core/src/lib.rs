//! # konvac-core
//!
//! Core types shared across all konvac crates: the error type every
//! subsystem reports through and the TOML configuration consumed by the
//! command-line front end.

pub mod config;
pub mod error;

pub use config::*;

pub use error::{KonvacError, KonvacResult};
