//! region_verify library: claimed-region verification through region-routed proxies
//!
//! Given a self-reported US state, this library tries to obtain an outbound
//! network path whose public IP geolocates to that state, and reports whether
//! the observed location corroborates the claim. It never fails the caller:
//! every outcome, including "could not tell", is a well-formed
//! [`VerificationResult`].
//!
//! # Example
//!
//! ```no_run
//! use region_verify::{Config, Verifier};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let verifier = Verifier::new(config)?;
//!
//! let result = verifier.verify("Pennsylvania", "203.0.113.7").await;
//! println!("{} via {}: {}", result.ip_masked, result.source, result.verdict);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
pub mod export;
pub mod geo;
pub mod initialization;
pub mod net;
pub mod proxy;
pub mod region;
pub mod verify;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ProxyTemplate};
pub use export::{AuditSink, JsonlSink};
pub use geo::GeoResult;
pub use net::mask_ip;
pub use proxy::{CredentialChain, CredentialResolver, ProxyCredential};
pub use region::{candidates, normalize_region, Region};
pub use verify::{MatchVerdict, Source, VerificationResult, Verifier};
