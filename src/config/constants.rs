//! Configuration constants.
//!
//! This module defines the constants used throughout the verification engine,
//! including per-call timeouts, provider endpoints and environment variable names.

use std::time::Duration;

// Network operation timeouts
/// Credential service request timeout.
pub const CREDENTIAL_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for a single request sent through the proxy tunnel.
pub const TUNNEL_TIMEOUT: Duration = Duration::from_secs(8);
/// Timeout for the direct (no proxy) geolocation lookup.
pub const PLAIN_LOOKUP_TIMEOUT: Duration = Duration::from_secs(6);
/// Wall-clock budget for the whole proxy phase of one verification.
/// Formula: primary candidate credential (5s) + direct geo (8s) + discovery (8s) + buffer (4s) = 25s
/// Remaining candidates are abandoned once it elapses; the client fallback
/// still runs under its own timeout.
pub const VERIFY_DEADLINE: Duration = Duration::from_secs(25);

/// Maximum number of postal-code candidates tried per verification.
/// Covers the longest curated list (primary plus four secondaries).
pub const MAX_CANDIDATES: usize = 5;

/// Maximum response body size accepted from any provider (64KB).
pub const MAX_RESPONSE_BODY_SIZE: usize = 64 * 1024;

/// User-Agent sent to credential and geolocation providers.
pub const DEFAULT_USER_AGENT: &str = concat!("region_verify/", env!("CARGO_PKG_VERSION"));

// Provider endpoints
/// ip-api style endpoint queried through the tunnel (plain HTTP only).
pub const TUNNEL_GEO_URL: &str =
    "http://ip-api.com/json/?fields=status,message,region,regionName,zip,query";
/// ipwho.is style endpoint queried directly; the IP is appended to the path.
pub const PLAIN_LOOKUP_BASE_URL: &str = "https://ipwho.is/";
/// Plain-text "what is my IP" endpoints, tried in order through the tunnel.
pub const IP_ECHO_URLS: &[&str] = &[
    "http://api.ipify.org/",
    "http://ipv4.icanhazip.com/",
    "http://checkip.amazonaws.com/",
    "http://ifconfig.me/ip",
];
/// Path appended to the credential service base URL.
pub const CREDENTIAL_SERVICE_PATH: &str = "/get-proxy";

/// Username parameter the proxy provider reads as a postal-code routing hint.
pub const ZIP_ROUTING_PARAM: &str = ";zip.";

// Environment variable names
pub const CREDENTIAL_SERVICE_URL_ENV: &str = "PROXY_SERVICE_URL";
pub const PROXY_HOST_ENV: &str = "PROXY_HOST";
pub const PROXY_PORT_ENV: &str = "PROXY_PORT";
pub const PROXY_BASE_USER_ENV: &str = "PROXY_BASE_USER";
pub const PROXY_PASS_ENV: &str = "PROXY_PASS";
