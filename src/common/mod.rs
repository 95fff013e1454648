//! Common utilities and definitions shared across modules
//!
//! Error definitions and front-end configuration used by every phase.

pub mod config;
pub mod error;

pub use config::{CatchCostPolicy, Config};
pub use error::{Error, Result};
