// Shared test helpers for mock providers and verifier setup.
//
// A single wiremock server plays every external party: the HTTP proxy (requests
// arrive in absolute form for the fake `geo.test` / `echo.test` hosts), the
// direct geolocation provider under `/lookup/`, and the credential service.

use std::time::Duration;

use region_verify::initialization::basic_auth_header;
use region_verify::{Config, ProxyTemplate};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TUNNEL_GEO_URL: &str = "http://geo.test/json/";
pub const ECHO_URL: &str = "http://echo.test/ip";
pub const BASE_USER: &str = "customer-abc";
pub const PASS: &str = "s3cret";

/// Config pointing every provider at `server`, with short timeouts.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    Config {
        credential_service_url: None,
        proxy_template: None,
        tunnel_geo_url: TUNNEL_GEO_URL.to_string(),
        plain_lookup_base_url: format!("{}/lookup/", server.uri()),
        ip_echo_urls: vec![ECHO_URL.to_string()],
        credential_timeout: Duration::from_secs(2),
        tunnel_timeout: Duration::from_secs(2),
        plain_lookup_timeout: Duration::from_secs(2),
        verify_deadline: Duration::from_secs(10),
        max_candidates: 4,
        user_agent: "region_verify_test/1.0".to_string(),
    }
}

/// Local template routing every candidate through `server` as the proxy.
#[allow(dead_code)]
pub fn template_for(server: &MockServer) -> ProxyTemplate {
    ProxyTemplate {
        host: server.address().ip().to_string(),
        port: server.address().port(),
        base_user: BASE_USER.to_string(),
        pass: PASS.to_string(),
    }
}

/// `Proxy-Authorization` value the templated credential sends for `postal`.
#[allow(dead_code)]
pub fn proxy_auth_for(postal: &str) -> String {
    basic_auth_header(&format!("{BASE_USER};zip.{postal}"), PASS)
        .expect("valid header")
        .to_str()
        .expect("ascii header")
        .to_string()
}

/// ip-api style success body.
#[allow(dead_code)]
pub fn ip_api_body(ip: &str, code: &str, name: &str, zip: &str) -> serde_json::Value {
    json!({
        "status": "success",
        "region": code,
        "regionName": name,
        "zip": zip,
        "query": ip,
    })
}

/// ipwho.is style success body.
#[allow(dead_code)]
pub fn ipwho_body(ip: &str, code: &str, name: &str, postal: &str) -> serde_json::Value {
    json!({
        "success": true,
        "ip": ip,
        "type": "IPv4",
        "country_code": "US",
        "region": name,
        "region_code": code,
        "postal": postal,
    })
}

/// Mounts the through-tunnel geo answer for one postal code.
#[allow(dead_code)]
pub async fn mount_tunnel_geo(
    server: &MockServer,
    postal: &str,
    body: serde_json::Value,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path("/json/"))
        .and(header("host", "geo.test"))
        .and(header("proxy-authorization", proxy_auth_for(postal).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mounts the IP-echo answer for one postal code.
#[allow(dead_code)]
pub async fn mount_echo(server: &MockServer, postal: &str, body: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/ip"))
        .and(header("host", "echo.test"))
        .and(header("proxy-authorization", proxy_auth_for(postal).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Mounts a direct lookup answer for `ip` (empty `ip` = self lookup).
#[allow(dead_code)]
pub async fn mount_lookup(
    server: &MockServer,
    ip: &str,
    body: serde_json::Value,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/lookup/{ip}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}
