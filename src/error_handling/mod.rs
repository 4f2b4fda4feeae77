//! Error handling and failure accounting.
//!
//! This module provides:
//! - Error type definitions for configuration, credentials, tunnel and geolocation calls
//! - Categorization of HTTP client errors raised inside the tunnel
//! - A request-scoped failure tally
//!
//! Every error defined here is absorbed by the orchestrator. A verification
//! always produces a result; these types only feed logging and the tally.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::FailureTally;
pub use types::{
    ConfigError, CredentialError, FailureKind, GeoError, InitializationError, TunnelError,
};
