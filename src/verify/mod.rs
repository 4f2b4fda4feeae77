//! Claimed-region verification.
//!
//! Control flow per request:
//! 1. Normalize the claimed region and pick its postal-code candidates
//! 2. For each candidate: credential → geo through the tunnel → egress IP
//!    discovery + direct lookup; the first region match wins (`source = proxy`)
//! 3. Otherwise look up the caller's own address (`source = client`)
//! 4. Compute the verdict and mask the chosen IP

mod orchestrator;
mod result;

// Re-export public API
pub use orchestrator::Verifier;
pub use result::{MatchVerdict, Source, VerificationResult};
