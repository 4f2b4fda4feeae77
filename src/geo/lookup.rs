//! Direct (no proxy) geolocation lookup.
//!
//! Used for the caller's own address and for an egress IP discovered through
//! the tunnel. When the address is empty, private or otherwise unroutable, the
//! provider is asked to resolve this host's own egress address instead.

use std::net::IpAddr;
use std::time::Duration;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::GeoError;
use crate::net::{is_routable, mask_ip, parse_ip, read_capped, CappedBody};

use super::types::{GeoResult, IpWhoPayload};

/// Client for the ipwho.is style lookup provider.
#[derive(Clone)]
pub struct PlainLookup {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PlainLookup {
    pub fn new(client: reqwest::Client, base_url: &str, timeout: Duration) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// URL queried for `ip`: `<base><ip>` for routable addresses, `<base>`
    /// alone otherwise.
    pub fn lookup_url(&self, ip: &str) -> String {
        match parse_ip(ip) {
            Some(addr) if is_routable(addr) => format!("{}{}", self.base_url, addr),
            _ => self.base_url.clone(),
        }
    }

    /// Looks up `ip`, returning a typed error on any failure.
    pub async fn try_lookup(&self, ip: &str) -> Result<GeoResult, GeoError> {
        self.fetch(&self.lookup_url(ip)).await
    }

    /// Looks up exactly `addr`, never substituting this host's own address.
    ///
    /// # Errors
    ///
    /// Returns `GeoError::ProviderFailure` for unroutable addresses without
    /// making a request.
    pub async fn try_lookup_address(&self, addr: IpAddr) -> Result<GeoResult, GeoError> {
        if !is_routable(addr) {
            return Err(GeoError::ProviderFailure(format!(
                "unroutable address {}",
                mask_ip(&addr.to_string())
            )));
        }
        self.fetch(&format!("{}{}", self.base_url, addr)).await
    }

    async fn fetch(&self, url: &str) -> Result<GeoResult, GeoError> {
        let response = self.client.get(url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status(status.as_u16()));
        }

        let body = match read_capped(response, MAX_RESPONSE_BODY_SIZE).await? {
            CappedBody::Complete(body) => body,
            CappedBody::TooLarge(len) => {
                return Err(GeoError::ProviderFailure(format!(
                    "body too large ({len} bytes)"
                )))
            }
        };
        let payload: IpWhoPayload = serde_json::from_slice(&body)?;
        payload.into_geo_result()
    }
}
