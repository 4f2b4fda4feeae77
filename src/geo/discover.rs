//! Proxy egress IP discovery through plain-text IP-echo endpoints.

use std::net::Ipv4Addr;

use log::debug;

use crate::error_handling::GeoError;
use crate::net::parse_ipv4_literal;
use crate::proxy::TunnelClient;

/// Asks each echo endpoint, in order, for the tunnel's egress address.
///
/// The first body that trims to a syntactically valid IPv4 literal wins;
/// failed requests and junk bodies move on to the next endpoint.
///
/// # Errors
///
/// Returns `GeoError::NoEchoAddress` when every endpoint fails.
pub async fn discover_egress_ip(
    tunnel: &TunnelClient,
    echo_urls: &[String],
) -> Result<Ipv4Addr, GeoError> {
    for url in echo_urls {
        match tunnel.get_text(url).await {
            Ok(body) => match parse_ipv4_literal(&body) {
                Some(ip) => return Ok(ip),
                None => debug!("IP echo {} returned no IPv4 literal", url),
            },
            Err(e) => debug!("IP echo {} failed: {}", url, e),
        }
    }
    Err(GeoError::NoEchoAddress)
}
