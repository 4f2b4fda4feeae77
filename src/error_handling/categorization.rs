//! Error categorization.
//!
//! Maps `reqwest::Error` values raised inside the tunnel onto `TunnelError`.

use super::types::TunnelError;

/// Categorizes a `reqwest::Error` from a tunnelled request into a `TunnelError`.
///
/// Status is checked first, then timeout, then connect; builder/redirect/other
/// failures collapse into `TunnelError::Other`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TunnelError {
    if let Some(status) = error.status() {
        return TunnelError::Status(status.as_u16());
    }

    if error.is_timeout() {
        return TunnelError::Timeout;
    }

    if error.is_connect() {
        return TunnelError::Connect(error.to_string());
    }

    if error.is_body() || error.is_decode() {
        return TunnelError::Body(error.to_string());
    }

    TunnelError::Other(error.to_string())
}
