//! Remote credential service strategy.
//!
//! `POST <base>/get-proxy` with `{"area_code": "<postal>"}`; the service answers
//! with a nested `proxy` object carrying `host`, `port`, `user` and `pass`.

use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Deserialize;
use serde_json::json;

use crate::config::{parse_port, CREDENTIAL_SERVICE_PATH, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::CredentialError;
use crate::net::{read_capped, CappedBody};

use super::credential::{CredentialResolver, ProxyCredential};

#[derive(Debug, Deserialize)]
struct CredentialEnvelope {
    proxy: Option<RawCredential>,
}

#[derive(Debug, Deserialize)]
struct RawCredential {
    host: Option<String>,
    port: Option<PortField>,
    user: Option<String>,
    pass: Option<String>,
}

/// Providers disagree on whether the port is a string or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortField {
    Number(u64),
    Text(String),
}

impl PortField {
    fn to_port(&self) -> Result<u16, CredentialError> {
        let raw = match self {
            PortField::Number(n) => n.to_string(),
            PortField::Text(s) => s.clone(),
        };
        parse_port(&raw).map_err(|e| CredentialError::Malformed(e.to_string()))
    }
}

/// Parses a credential service body into a `ProxyCredential`.
pub(crate) fn parse_credential_body(body: &[u8]) -> Result<ProxyCredential, CredentialError> {
    let envelope: CredentialEnvelope = serde_json::from_slice(body)
        .map_err(|e| CredentialError::Malformed(format!("invalid JSON: {e}")))?;
    let raw = envelope
        .proxy
        .ok_or_else(|| CredentialError::Malformed("missing proxy object".to_string()))?;

    let missing = |field: &str| CredentialError::Malformed(format!("missing {field}"));
    let host = raw.host.ok_or_else(|| missing("host"))?;
    let port = raw.port.ok_or_else(|| missing("port"))?.to_port()?;
    let user = raw.user.ok_or_else(|| missing("user"))?;
    let pass = raw.pass.ok_or_else(|| missing("pass"))?;

    ProxyCredential::new(host, port, user, pass)
}

/// Fetches credentials from the remote credential service.
pub struct RemoteResolver {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl RemoteResolver {
    pub fn new(client: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                CREDENTIAL_SERVICE_PATH
            ),
            timeout,
        }
    }

    async fn fetch(&self, postal: &str) -> Result<ProxyCredential, CredentialError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&json!({ "area_code": postal }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CredentialError::Status(status.as_u16()));
        }

        match read_capped(response, MAX_RESPONSE_BODY_SIZE).await? {
            CappedBody::Complete(body) => parse_credential_body(&body),
            CappedBody::TooLarge(len) => Err(CredentialError::Malformed(format!(
                "body too large ({len} bytes)"
            ))),
        }
    }
}

impl CredentialResolver for RemoteResolver {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn resolve<'a>(
        &'a self,
        postal: &'a str,
    ) -> BoxFuture<'a, Result<ProxyCredential, CredentialError>> {
        self.fetch(postal).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_port() {
        let body = br#"{"proxy":{"host":"gate.example.net","port":"7000","user":"u;zip.17101","pass":"p"}}"#;
        let credential = parse_credential_body(body).unwrap();
        assert_eq!(credential.host, "gate.example.net");
        assert_eq!(credential.port, 7000);
        assert_eq!(credential.user, "u;zip.17101");
        assert_eq!(credential.pass, "p");
    }

    #[test]
    fn test_parse_numeric_port_and_extra_fields() {
        let body = br#"{"ok":true,"proxy":{"host":"10.0.0.5","port":8080,"user":"u","pass":"p","ttl":60}}"#;
        let credential = parse_credential_body(body).unwrap();
        assert_eq!(credential.port, 8080);
    }

    #[test]
    fn test_parse_rejects_malformed_bodies() {
        let cases: &[&[u8]] = &[
            b"not json",
            b"{}",
            br#"{"proxy":null}"#,
            br#"{"proxy":{"host":"h","port":"7000","user":"u"}}"#,
            br#"{"proxy":{"host":"h","port":"0","user":"u","pass":"p"}}"#,
            br#"{"proxy":{"host":"h","port":70000,"user":"u","pass":"p"}}"#,
            br#"{"proxy":{"host":"","port":"7000","user":"u","pass":"p"}}"#,
            br#"{"host":"h","port":"7000","user":"u","pass":"p"}"#,
        ];
        for body in cases {
            let result = parse_credential_body(body);
            assert!(
                matches!(result, Err(CredentialError::Malformed(_))),
                "body {:?} should be malformed",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_endpoint_join() {
        let resolver = RemoteResolver::new(
            reqwest::Client::new(),
            "http://broker.example.net:8080/",
            Duration::from_secs(5),
        );
        assert_eq!(resolver.endpoint, "http://broker.example.net:8080/get-proxy");
    }
}
