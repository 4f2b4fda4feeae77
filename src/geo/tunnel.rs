//! Geolocation queried through the proxy tunnel.

use log::debug;

use crate::error_handling::GeoError;
use crate::proxy::TunnelClient;

use super::types::{GeoResult, IpApiPayload};

/// Fetches the ip-api style document through the tunnel and extracts the
/// proxy egress location.
///
/// # Errors
///
/// - `GeoError::Tunnel` when the tunnelled request fails
/// - `GeoError::Parse` when the body is not the expected JSON
/// - `GeoError::ProviderFailure` when the payload status is not `success`
pub async fn tunnel_geo(tunnel: &TunnelClient, geo_url: &str) -> Result<GeoResult, GeoError> {
    let body = tunnel.get_text(geo_url).await?;
    let payload: IpApiPayload = serde_json::from_str(&body)?;
    let geo = payload.into_geo_result()?;
    debug!(
        "Tunnel geo: region={:?} postal={:?}",
        geo.region_code, geo.postal
    );
    Ok(geo)
}
