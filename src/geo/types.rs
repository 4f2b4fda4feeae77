//! Geolocation data structures.
//!
//! Each provider's loosely structured JSON is parsed into a narrow record with
//! explicit optional fields, then converted into a `GeoResult`. An empty
//! `region_code` on the result is the explicit "inconclusive" state.

use serde::{Deserialize, Serialize};

use crate::error_handling::GeoError;
use crate::region::{normalize_region, region_name};

/// Observed location of one IP address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoResult {
    pub ip: String,
    /// Uppercase two-letter region code; empty when inconclusive
    pub region_code: String,
    pub region_name: String,
    pub postal: String,
}

impl GeoResult {
    /// `true` when the provider yielded a region code.
    pub fn is_conclusive(&self) -> bool {
        !self.region_code.is_empty()
    }

    /// `true` when the observed region equals a non-empty claimed code.
    pub fn matches(&self, claimed_code: &str) -> bool {
        !claimed_code.is_empty() && self.region_code == claimed_code
    }
}

/// Canonicalizes a provider region code.
///
/// The code is trimmed and uppercased and must be exactly two ASCII letters.
/// When it is absent or malformed, a recognizable US region name is used to
/// recover the code; otherwise the result is empty.
pub(crate) fn canonical_region_code(code: Option<&str>, name: Option<&str>) -> String {
    let upper = code.map(|c| c.trim().to_uppercase()).unwrap_or_default();
    if upper.len() == 2 && upper.chars().all(|c| c.is_ascii_alphabetic()) {
        return upper;
    }
    name.and_then(normalize_region)
        .map(|region| region.code.to_string())
        .unwrap_or_default()
}

fn clean(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Provider region name, or the canonical name for `region_code` when the
/// provider left it blank.
fn observed_region_name(name: Option<String>, region_code: &str) -> String {
    let name = clean(name);
    if !name.is_empty() {
        return name;
    }
    region_name(region_code).unwrap_or_default().to_string()
}

/// ip-api style payload (queried through the tunnel).
///
/// `{"status":"success","region":"PA","regionName":"Pennsylvania","zip":"17101","query":"198.51.100.23"}`
#[derive(Debug, Deserialize)]
pub(crate) struct IpApiPayload {
    pub status: Option<String>,
    pub message: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
    pub zip: Option<String>,
    pub query: Option<String>,
}

impl IpApiPayload {
    pub fn into_geo_result(self) -> Result<GeoResult, GeoError> {
        if self.status.as_deref() != Some("success") {
            return Err(GeoError::ProviderFailure(
                self.message
                    .or(self.status)
                    .unwrap_or_else(|| "missing status".to_string()),
            ));
        }
        let region_code =
            canonical_region_code(self.region.as_deref(), self.region_name.as_deref());
        Ok(GeoResult {
            ip: clean(self.query),
            region_name: observed_region_name(self.region_name, &region_code),
            region_code,
            postal: clean(self.zip),
        })
    }
}

/// ipwho.is style payload (queried directly).
///
/// `{"success":true,"ip":"203.0.113.7","region":"Texas","region_code":"TX","postal":"78701"}`
#[derive(Debug, Deserialize)]
pub(crate) struct IpWhoPayload {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub ip: Option<String>,
    pub region: Option<String>,
    pub region_code: Option<String>,
    pub postal: Option<String>,
}

impl IpWhoPayload {
    pub fn into_geo_result(self) -> Result<GeoResult, GeoError> {
        if self.success != Some(true) {
            return Err(GeoError::ProviderFailure(
                self.message
                    .unwrap_or_else(|| "success flag not set".to_string()),
            ));
        }
        let region_code =
            canonical_region_code(self.region_code.as_deref(), self.region.as_deref());
        Ok(GeoResult {
            ip: clean(self.ip),
            region_name: observed_region_name(self.region, &region_code),
            region_code,
            postal: clean(self.postal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_api_success() {
        let payload: IpApiPayload = serde_json::from_str(
            r#"{"status":"success","region":"pa","regionName":"Pennsylvania","zip":"17101","query":"198.51.100.23"}"#,
        )
        .unwrap();
        let geo = payload.into_geo_result().unwrap();
        assert_eq!(geo.region_code, "PA");
        assert_eq!(geo.region_name, "Pennsylvania");
        assert_eq!(geo.postal, "17101");
        assert_eq!(geo.ip, "198.51.100.23");
        assert!(geo.is_conclusive());
        assert!(geo.matches("PA"));
        assert!(!geo.matches("NY"));
        assert!(!geo.matches(""));
    }

    #[test]
    fn test_ip_api_fail_status() {
        let payload: IpApiPayload =
            serde_json::from_str(r#"{"status":"fail","message":"reserved range","query":"10.0.0.1"}"#)
                .unwrap();
        let err = payload.into_geo_result().unwrap_err();
        assert!(matches!(err, GeoError::ProviderFailure(m) if m == "reserved range"));
    }

    #[test]
    fn test_ip_api_missing_status_is_failure() {
        let payload: IpApiPayload = serde_json::from_str(r#"{"region":"PA"}"#).unwrap();
        assert!(payload.into_geo_result().is_err());
    }

    #[test]
    fn test_ip_api_success_without_region_is_inconclusive() {
        let payload: IpApiPayload =
            serde_json::from_str(r#"{"status":"success","query":"198.51.100.23"}"#).unwrap();
        let geo = payload.into_geo_result().unwrap();
        assert!(!geo.is_conclusive());
        assert!(!geo.matches("PA"));
    }

    #[test]
    fn test_ipwho_success_and_failure() {
        let ok: IpWhoPayload = serde_json::from_str(
            r#"{"success":true,"ip":"203.0.113.7","region":"Texas","region_code":"TX","postal":"78701","city":"Austin"}"#,
        )
        .unwrap();
        let geo = ok.into_geo_result().unwrap();
        assert_eq!(geo.region_code, "TX");
        assert_eq!(geo.region_name, "Texas");

        let failed: IpWhoPayload =
            serde_json::from_str(r#"{"success":false,"message":"Invalid IP address"}"#).unwrap();
        assert!(failed.into_geo_result().is_err());
    }

    #[test]
    fn test_missing_region_name_recovered_from_code() {
        let payload: IpApiPayload = serde_json::from_str(
            r#"{"status":"success","region":"oh","regionName":"","query":"198.51.100.4"}"#,
        )
        .unwrap();
        let geo = payload.into_geo_result().unwrap();
        assert_eq!(geo.region_code, "OH");
        assert_eq!(geo.region_name, "Ohio");

        let ipwho: IpWhoPayload =
            serde_json::from_str(r#"{"success":true,"ip":"203.0.113.7","region_code":"ON"}"#)
                .unwrap();
        let geo = ipwho.into_geo_result().unwrap();
        assert_eq!(geo.region_code, "ON");
        assert_eq!(geo.region_name, "", "no canonical name outside the US table");
    }

    #[test]
    fn test_canonical_region_code() {
        assert_eq!(canonical_region_code(Some(" tx "), None), "TX");
        assert_eq!(canonical_region_code(Some("ON"), Some("Ontario")), "ON");
        assert_eq!(canonical_region_code(None, Some("New York")), "NY");
        assert_eq!(canonical_region_code(Some("US-CA"), Some("California")), "CA");
        assert_eq!(canonical_region_code(Some("12"), None), "");
        assert_eq!(canonical_region_code(Some(""), Some("Bavaria")), "");
        assert_eq!(canonical_region_code(None, None), "");
    }
}
