//! Size-capped response body reads.
//!
//! The declared `Content-Length` is checked before anything is read; bodies
//! without one are read chunk by chunk and abandoned as soon as the cap is
//! crossed.

use reqwest::Response;

/// Outcome of a capped body read.
#[derive(Debug, PartialEq, Eq)]
pub enum CappedBody {
    Complete(Vec<u8>),
    /// Declared or received length that crossed the cap
    TooLarge(usize),
}

/// Reads `response` into memory, holding at most `cap` bytes.
///
/// # Errors
///
/// Returns the transport error if a chunk cannot be read.
pub async fn read_capped(mut response: Response, cap: usize) -> Result<CappedBody, reqwest::Error> {
    if let Some(declared) = response.content_length() {
        if declared > cap as u64 {
            return Ok(CappedBody::TooLarge(
                usize::try_from(declared).unwrap_or(usize::MAX),
            ));
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let received = body.len() + chunk.len();
        if received > cap {
            return Ok(CappedBody::TooLarge(received));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(CappedBody::Complete(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch(server: &MockServer, route: &str) -> Response {
        reqwest::Client::new()
            .get(format!("{}{}", server.uri(), route))
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_body_within_cap_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/small"))
            .respond_with(ResponseTemplate::new(200).set_body_string("198.51.100.7"))
            .mount(&server)
            .await;

        let body = read_capped(fetch(&server, "/small").await, 64).await.unwrap();
        assert_eq!(body, CappedBody::Complete(b"198.51.100.7".to_vec()));
    }

    #[tokio::test]
    async fn test_body_over_cap_is_refused() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/large"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(4096)))
            .mount(&server)
            .await;

        let body = read_capped(fetch(&server, "/large").await, 1024).await.unwrap();
        assert_eq!(body, CappedBody::TooLarge(4096));
    }

    #[tokio::test]
    async fn test_body_exactly_at_cap_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/edge"))
            .respond_with(ResponseTemplate::new(200).set_body_string("y".repeat(32)))
            .mount(&server)
            .await;

        let body = read_capped(fetch(&server, "/edge").await, 32).await.unwrap();
        assert!(matches!(body, CappedBody::Complete(bytes) if bytes.len() == 32));
    }
}
