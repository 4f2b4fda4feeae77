//! Single plain-HTTP GET through an authenticated HTTP proxy.
//!
//! The request goes to the proxy in absolute form (`GET http://target/path`)
//! with the target's `Host` header and `Proxy-Authorization: Basic ...`.
//! Encrypted targets cannot be framed this way and are rejected before any
//! connection is made. No retry happens at this layer.

use std::time::Duration;

use log::debug;
use url::Url;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{categorize_reqwest_error, TunnelError};
use crate::initialization::init_tunnel_client;
use crate::net::{read_capped, CappedBody};

use super::credential::ProxyCredential;

/// HTTP client bound to one proxy credential.
///
/// Built per candidate and dropped with it; connections never outlive the
/// candidate that opened them.
pub struct TunnelClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TunnelClient {
    /// Builds a tunnel client for `credential` with a fixed per-request timeout.
    pub fn new(
        credential: &ProxyCredential,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, TunnelError> {
        Ok(Self {
            client: init_tunnel_client(credential, timeout, user_agent)?,
            endpoint: credential.endpoint(),
        })
    }

    /// Fetches `target` through the proxy and returns the body as text.
    ///
    /// # Errors
    ///
    /// - `UnsupportedScheme` for anything but `http://`
    /// - `Status` for a non-2xx answer (including 407 from the proxy)
    /// - `Timeout`, `Connect`, `Body`, `TooLarge`, `Other` for transport failures
    pub async fn get_text(&self, target: &str) -> Result<String, TunnelError> {
        let url = Url::parse(target).map_err(|_| TunnelError::InvalidAddress(target.to_string()))?;
        if url.scheme() != "http" {
            return Err(TunnelError::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.host_str().is_none() {
            return Err(TunnelError::InvalidAddress(target.to_string()));
        }

        debug!("Tunnel GET {} via {}", url, self.endpoint);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TunnelError::Status(status.as_u16()));
        }

        match read_capped(response, MAX_RESPONSE_BODY_SIZE)
            .await
            .map_err(|e| categorize_reqwest_error(&e))?
        {
            CappedBody::Complete(body) => Ok(String::from_utf8_lossy(&body).into_owned()),
            CappedBody::TooLarge(len) => Err(TunnelError::TooLarge(len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tunnel() -> TunnelClient {
        let credential = ProxyCredential::new("127.0.0.1", 9, "u", "p").unwrap();
        TunnelClient::new(&credential, Duration::from_secs(1), "test/1.0").unwrap()
    }

    #[tokio::test]
    async fn test_rejects_https_target() {
        let result = tunnel().get_text("https://ip-api.com/json/").await;
        assert!(matches!(result, Err(TunnelError::UnsupportedScheme(s)) if s == "https"));
    }

    #[tokio::test]
    async fn test_rejects_unparseable_target() {
        let result = tunnel().get_text("not a url").await;
        assert!(matches!(result, Err(TunnelError::InvalidAddress(_))));
    }
}
