//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, provider endpoints, environment names)
//! - The library `Config` and the local proxy template
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, ProxyTemplate};
pub(crate) use types::parse_port;
