//! Verification outcome types.

use serde::{Deserialize, Serialize};

use crate::geo::GeoResult;
use crate::net::mask_ip;

/// Which network path produced the observed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// A region-routed proxy egress address
    Proxy,
    /// The caller's own address
    Client,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Proxy => "proxy",
            Source::Client => "client",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-valued agreement between claimed and observed regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchVerdict {
    Yes,
    No,
    Unknown,
}

impl MatchVerdict {
    /// "Unknown" when either code is empty, otherwise code equality.
    pub fn evaluate(claimed_code: &str, observed_code: &str) -> Self {
        if claimed_code.is_empty() || observed_code.is_empty() {
            MatchVerdict::Unknown
        } else if claimed_code == observed_code {
            MatchVerdict::Yes
        } else {
            MatchVerdict::No
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchVerdict::Yes => "Yes",
            MatchVerdict::No => "No",
            MatchVerdict::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only artifact handed to the audit sink.
///
/// The observed IP is already masked; the raw address never leaves the
/// orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub ip_masked: String,
    pub source: Source,
    pub region_code: String,
    pub region_name: String,
    pub postal: String,
    #[serde(rename = "match")]
    pub verdict: MatchVerdict,
}

impl VerificationResult {
    /// Assembles a result from the chosen path.
    ///
    /// `fallback_ip` is masked when the geolocation result is missing or did
    /// not report an address.
    pub fn assemble(
        source: Source,
        geo: Option<&GeoResult>,
        fallback_ip: &str,
        claimed_code: &str,
    ) -> Self {
        let ip = geo
            .map(|g| g.ip.as_str())
            .filter(|ip| !ip.is_empty())
            .unwrap_or(fallback_ip);
        let (region_code, region_name, postal) = match geo {
            Some(g) => (g.region_code.clone(), g.region_name.clone(), g.postal.clone()),
            None => (String::new(), String::new(), String::new()),
        };
        let verdict = MatchVerdict::evaluate(claimed_code, &region_code);

        Self {
            ip_masked: mask_ip(ip),
            source,
            region_code,
            region_name,
            postal,
            verdict,
        }
    }

    /// Ordered `(column, value)` pairs for row-oriented stores.
    pub fn row_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ip_masked", self.ip_masked.clone()),
            ("ip_source", self.source.to_string()),
            ("ip_region_code", self.region_code.clone()),
            ("ip_region_name", self.region_name.clone()),
            ("ip_postal", self.postal.clone()),
            ("region_match", self.verdict.to_string()),
        ]
    }
}
