//! Error type definitions.
//!
//! This module defines the error types for each external call made during a
//! verification, plus the coarse failure kinds they are tallied under.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for configuration loading.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Proxy port is not an integer in 1..=65535.
    #[error("Invalid proxy port: {0:?}")]
    InvalidPort(String),

    /// Credential service base URL does not parse.
    #[error("Invalid credential service URL: {0:?}")]
    InvalidUrl(String),
}

/// Why a credential strategy produced nothing for a postal code.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// No strategy is configured at all.
    #[error("No credential source configured")]
    NotConfigured,

    /// Transport error or timeout talking to the credential service.
    #[error("Credential service request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// Credential service answered with a non-2xx status.
    #[error("Credential service returned status {0}")]
    Status(u16),

    /// Credential service body did not contain a usable credential.
    #[error("Malformed credential response: {0}")]
    Malformed(String),
}

/// Failure of a single request sent through the proxy tunnel.
#[derive(Error, Debug)]
pub enum TunnelError {
    /// Only plain-HTTP targets can be framed through the proxy.
    #[error("Unsupported target scheme for tunnel: {0}")]
    UnsupportedScheme(String),

    /// Target or proxy address does not parse.
    #[error("Invalid tunnel address: {0}")]
    InvalidAddress(String),

    /// The per-request timeout elapsed.
    #[error("Tunnel request timed out")]
    Timeout,

    /// Could not connect to the proxy.
    #[error("Tunnel connect error: {0}")]
    Connect(String),

    /// Proxy or target answered with a non-2xx status.
    #[error("Tunnel request returned status {0}")]
    Status(u16),

    /// Response body could not be read.
    #[error("Tunnel body error: {0}")]
    Body(String),

    /// Response body exceeded the size cap.
    #[error("Tunnel response too large ({0} bytes)")]
    TooLarge(usize),

    /// Anything else reported by the HTTP client.
    #[error("Tunnel request failed: {0}")]
    Other(String),
}

/// Failure of a geolocation or IP-discovery step.
#[derive(Error, Debug)]
pub enum GeoError {
    /// The tunnelled request itself failed.
    #[error(transparent)]
    Tunnel(#[from] TunnelError),

    /// Direct request to the lookup provider failed.
    #[error("Geolocation request failed: {0}")]
    Request(#[from] ReqwestError),

    /// Direct lookup provider answered with a non-2xx status.
    #[error("Geolocation provider returned status {0}")]
    Status(u16),

    /// Payload was not the JSON document we expect.
    #[error("Geolocation payload parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Provider reported failure in its own payload.
    #[error("Geolocation provider reported failure: {0}")]
    ProviderFailure(String),

    /// No IP-echo endpoint returned a valid IPv4 literal.
    #[error("No IP-echo endpoint returned a valid address")]
    NoEchoAddress,
}

/// Coarse failure kinds absorbed by the orchestrator.
///
/// None of these ever reach the caller; they are counted per verification and
/// reported in the summary log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    CredentialUnavailable,
    TunnelRequestFailed,
    GeoLookupInconclusive,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::CredentialUnavailable => "credential unavailable",
            FailureKind::TunnelRequestFailed => "tunnel request failed",
            FailureKind::GeoLookupInconclusive => "geolocation inconclusive",
        }
    }
}

impl GeoError {
    /// Tunnel transport failures and provider-level inconclusive answers are
    /// tallied separately.
    pub fn kind(&self) -> FailureKind {
        match self {
            GeoError::Tunnel(_) => FailureKind::TunnelRequestFailed,
            _ => FailureKind::GeoLookupInconclusive,
        }
    }
}
