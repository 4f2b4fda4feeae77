//! HTTP client initialization.
//!
//! This module provides functions to build the direct client shared by a
//! verifier and the short-lived per-credential tunnel clients.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::{InitializationError, TunnelError};
use crate::proxy::ProxyCredential;

/// Initializes the direct (no proxy) HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - No system proxy (the caller's own path must not be rerouted)
///
/// Per-call timeouts are applied on each request, since the credential service
/// and the geolocation lookup use different budgets.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .no_proxy()
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Builds the `Proxy-Authorization` value for a credential.
///
/// The header is marked sensitive so it never shows up in debug output.
pub fn basic_auth_header(user: &str, pass: &str) -> Result<HeaderValue, TunnelError> {
    let encoded = STANDARD.encode(format!("{user}:{pass}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|e| TunnelError::InvalidAddress(e.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Builds a client that sends every plain-HTTP request through one proxy.
///
/// Requests go to `credential.host:credential.port` in absolute form with the
/// target's `Host` header and a manually framed `Proxy-Authorization: Basic`
/// header. Redirects are not followed and the whole request is bounded by
/// `timeout`. The client is meant to live for a single candidate only.
pub fn init_tunnel_client(
    credential: &ProxyCredential,
    timeout: Duration,
    user_agent: &str,
) -> Result<reqwest::Client, TunnelError> {
    let host = if credential.host.contains(':') {
        format!("[{}]", credential.host)
    } else {
        credential.host.clone()
    };
    let proxy_url = format!("http://{}:{}", host, credential.port);

    let proxy = reqwest::Proxy::http(&proxy_url)
        .map_err(|_| TunnelError::InvalidAddress(proxy_url.clone()))?
        .custom_http_auth(basic_auth_header(&credential.user, &credential.pass)?);

    ClientBuilder::new()
        .proxy(proxy)
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| TunnelError::Other(e.to_string()))
}
