//! Proxy credentials and the resolver chain.

use futures::future::BoxFuture;
use log::{debug, warn};

use crate::config::Config;
use crate::error_handling::CredentialError;

use super::remote::RemoteResolver;
use super::template::TemplateResolver;

/// Connection parameters for one proxy egress point.
///
/// Resolved fresh per candidate per request and never reused.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyCredential {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl ProxyCredential {
    /// Creates a credential, rejecting an empty host or port 0.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        pass: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        let host = host.into().trim().to_string();
        if host.is_empty() {
            return Err(CredentialError::Malformed("empty host".to_string()));
        }
        if port == 0 {
            return Err(CredentialError::Malformed("port 0".to_string()));
        }
        Ok(Self {
            host,
            port,
            user: user.into(),
            pass: pass.into(),
        })
    }

    /// `host:port` for log lines.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl std::fmt::Debug for ProxyCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyCredential")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

/// A strategy that turns a postal code into a proxy credential.
///
/// Implementations must not panic and must bound their own latency; any
/// failure is reported as a `CredentialError` and the chain moves on.
pub trait CredentialResolver: Send + Sync {
    /// Short strategy name for log lines.
    fn name(&self) -> &'static str;

    /// Resolves a credential routed towards `postal`.
    fn resolve<'a>(
        &'a self,
        postal: &'a str,
    ) -> BoxFuture<'a, Result<ProxyCredential, CredentialError>>;
}

/// Credential strategies tried in fixed priority order.
#[derive(Default)]
pub struct CredentialChain {
    resolvers: Vec<Box<dyn CredentialResolver>>,
}

impl CredentialChain {
    pub fn new(resolvers: Vec<Box<dyn CredentialResolver>>) -> Self {
        Self { resolvers }
    }

    /// Builds the standard chain: remote credential service first (when a base
    /// URL is configured), then the local template (when complete).
    pub fn from_config(config: &Config, client: reqwest::Client) -> Self {
        let mut resolvers: Vec<Box<dyn CredentialResolver>> = Vec::new();
        if let Some(base) = config.credential_service_url.as_deref() {
            resolvers.push(Box::new(RemoteResolver::new(
                client,
                base,
                config.credential_timeout,
            )));
        }
        if let Some(template) = config.proxy_template.clone() {
            resolvers.push(Box::new(TemplateResolver::new(template)));
        }
        Self { resolvers }
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Tries each strategy in order and returns the first credential.
    ///
    /// # Errors
    ///
    /// Returns the last strategy's error when every strategy fails, or
    /// `CredentialError::NotConfigured` when the chain is empty.
    pub async fn resolve(&self, postal: &str) -> Result<ProxyCredential, CredentialError> {
        let mut last_error = CredentialError::NotConfigured;
        for resolver in &self.resolvers {
            match resolver.resolve(postal).await {
                Ok(credential) => {
                    debug!(
                        "Resolved proxy {} for postal {} via {}",
                        credential.endpoint(),
                        postal,
                        resolver.name()
                    );
                    return Ok(credential);
                }
                Err(e) => {
                    warn!(
                        "Credential strategy {} failed for postal {}: {}",
                        resolver.name(),
                        postal,
                        e
                    );
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}
