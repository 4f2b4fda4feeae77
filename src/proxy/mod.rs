//! Proxy credentials and the authenticated tunnel client.
//!
//! Credential resolution strategies, tried in priority order:
//! 1. Remote credential service (`RemoteResolver`)
//! 2. Local template from static proxy parameters (`TemplateResolver`)

mod credential;
mod remote;
mod template;
mod tunnel;

// Re-export public API
pub use credential::{CredentialChain, CredentialResolver, ProxyCredential};
pub use remote::RemoteResolver;
pub use template::TemplateResolver;
pub use tunnel::TunnelClient;
