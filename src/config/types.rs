//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CREDENTIAL_SERVICE_URL_ENV, CREDENTIAL_TIMEOUT, DEFAULT_USER_AGENT, IP_ECHO_URLS,
    MAX_CANDIDATES, PLAIN_LOOKUP_BASE_URL, PLAIN_LOOKUP_TIMEOUT, PROXY_BASE_USER_ENV,
    PROXY_HOST_ENV, PROXY_PASS_ENV, PROXY_PORT_ENV, TUNNEL_GEO_URL, TUNNEL_TIMEOUT,
    VERIFY_DEADLINE,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Static proxy connection parameters used to template per-postal-code credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyTemplate {
    pub host: String,
    pub port: u16,
    pub base_user: String,
    pub pass: String,
}

impl std::fmt::Debug for ProxyTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyTemplate")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_user", &self.base_user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

impl ProxyTemplate {
    /// Builds a template from raw parameters, validating the port.
    ///
    /// Returns `Ok(None)` when any parameter is missing or blank: an incomplete
    /// template simply means the local strategy is not configured.
    pub fn from_parts(
        host: Option<String>,
        port: Option<String>,
        base_user: Option<String>,
        pass: Option<String>,
    ) -> Result<Option<Self>, ConfigError> {
        let non_blank = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let (Some(host), Some(port), Some(base_user), Some(pass)) = (
            non_blank(host),
            non_blank(port),
            non_blank(base_user),
            non_blank(pass),
        ) else {
            return Ok(None);
        };

        let port = parse_port(&port)?;
        Ok(Some(Self {
            host,
            port,
            base_user,
            pass,
        }))
    }
}

/// Parses a proxy port, rejecting 0 and anything outside `u16`.
pub(crate) fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_string())),
        Ok(port) => Ok(port),
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use region_verify::Config;
///
/// let config = Config {
///     credential_service_url: Some("http://proxy-broker.internal:8080".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote credential service (optional)
    pub credential_service_url: Option<String>,

    /// Local credential template (optional)
    pub proxy_template: Option<ProxyTemplate>,

    /// Geolocation endpoint queried through the tunnel
    pub tunnel_geo_url: String,

    /// Base URL of the direct geolocation lookup; the IP is appended
    pub plain_lookup_base_url: String,

    /// IP-echo endpoints, tried in order through the tunnel
    pub ip_echo_urls: Vec<String>,

    /// Credential service request timeout
    pub credential_timeout: Duration,

    /// Per-request tunnel timeout
    pub tunnel_timeout: Duration,

    /// Direct lookup timeout
    pub plain_lookup_timeout: Duration,

    /// Wall-clock budget for the proxy phase
    pub verify_deadline: Duration,

    /// Upper bound on candidates tried per verification
    pub max_candidates: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential_service_url: None,
            proxy_template: None,
            tunnel_geo_url: TUNNEL_GEO_URL.to_string(),
            plain_lookup_base_url: PLAIN_LOOKUP_BASE_URL.to_string(),
            ip_echo_urls: IP_ECHO_URLS.iter().map(|s| s.to_string()).collect(),
            credential_timeout: CREDENTIAL_TIMEOUT,
            tunnel_timeout: TUNNEL_TIMEOUT,
            plain_lookup_timeout: PLAIN_LOOKUP_TIMEOUT,
            verify_deadline: VERIFY_DEADLINE,
            max_candidates: MAX_CANDIDATES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration from process environment variables.
    ///
    /// Reads the credential service base URL and the four proxy template
    /// parameters; everything else keeps its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential_service_url = lookup(CREDENTIAL_SERVICE_URL_ENV)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        if let Some(base) = credential_service_url.as_deref() {
            url::Url::parse(base).map_err(|_| ConfigError::InvalidUrl(base.to_string()))?;
        }

        let proxy_template = ProxyTemplate::from_parts(
            lookup(PROXY_HOST_ENV),
            lookup(PROXY_PORT_ENV),
            lookup(PROXY_BASE_USER_ENV),
            lookup(PROXY_PASS_ENV),
        )?;

        Ok(Self {
            credential_service_url,
            proxy_template,
            ..Default::default()
        })
    }
}

/// Command-line options for the `region_verify` binary.
#[derive(Debug, Parser)]
#[command(
    name = "region_verify",
    about = "Checks whether a claimed US state matches an observed network location"
)]
pub struct Opt {
    /// Claimed US state (two-letter code or full name)
    #[arg(long)]
    pub state: String,

    /// Caller's observed IP address (omit to resolve this host's egress address)
    #[arg(long, default_value = "")]
    pub client_ip: String,

    /// Append the result as a JSON line to this file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Wall-clock budget for the proxy phase in seconds
    #[arg(long, default_value_t = VERIFY_DEADLINE.as_secs())]
    pub deadline_secs: u64,

    /// Maximum number of postal-code candidates to try
    #[arg(long, default_value_t = MAX_CANDIDATES)]
    pub max_candidates: usize,
}

impl Opt {
    /// Merges CLI overrides into an environment-derived configuration.
    pub fn apply(&self, config: Config) -> Config {
        Config {
            verify_deadline: Duration::from_secs(self.deadline_secs),
            max_candidates: self.max_candidates,
            ..config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.credential_service_url.is_none());
        assert!(config.proxy_template.is_none());
        assert_eq!(config.credential_timeout, Duration::from_secs(5));
        assert_eq!(config.tunnel_timeout, Duration::from_secs(8));
        assert_eq!(config.max_candidates, 5);
        assert_eq!(config.ip_echo_urls.len(), IP_ECHO_URLS.len());
    }

    #[test]
    fn test_from_lookup_empty_environment() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.credential_service_url.is_none());
        assert!(config.proxy_template.is_none());
    }

    #[test]
    fn test_from_lookup_full_template() {
        let config = Config::from_lookup(lookup_from(&[
            ("PROXY_HOST", "gate.example.net"),
            ("PROXY_PORT", "7000"),
            ("PROXY_BASE_USER", "customer-abc"),
            ("PROXY_PASS", "s3cret"),
            ("PROXY_SERVICE_URL", "http://broker.example.net:8080/"),
        ]))
        .unwrap();

        let template = config.proxy_template.expect("template should be configured");
        assert_eq!(template.host, "gate.example.net");
        assert_eq!(template.port, 7000);
        assert_eq!(template.base_user, "customer-abc");
        assert_eq!(
            config.credential_service_url.as_deref(),
            Some("http://broker.example.net:8080")
        );
    }

    #[test]
    fn test_from_lookup_partial_template_is_unconfigured() {
        let config = Config::from_lookup(lookup_from(&[
            ("PROXY_HOST", "gate.example.net"),
            ("PROXY_PORT", "7000"),
            ("PROXY_PASS", ""),
        ]))
        .unwrap();
        assert!(config.proxy_template.is_none());
    }

    #[test]
    fn test_from_lookup_rejects_bad_port() {
        for port in ["0", "65536", "http", "-1"] {
            let result = Config::from_lookup(lookup_from(&[
                ("PROXY_HOST", "gate.example.net"),
                ("PROXY_PORT", port),
                ("PROXY_BASE_USER", "customer-abc"),
                ("PROXY_PASS", "s3cret"),
            ]));
            assert!(
                matches!(result, Err(ConfigError::InvalidPort(_))),
                "port {port} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_lookup_rejects_bad_service_url() {
        let result = Config::from_lookup(lookup_from(&[("PROXY_SERVICE_URL", "not a url")]));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_template_debug_redacts_password() {
        let template = ProxyTemplate {
            host: "gate.example.net".to_string(),
            port: 7000,
            base_user: "customer-abc".to_string(),
            pass: "s3cret".to_string(),
        };
        let rendered = format!("{template:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("gate.example.net"));
    }

    #[test]
    fn test_opt_apply_overrides() {
        let opt = Opt::parse_from([
            "region_verify",
            "--state",
            "PA",
            "--deadline-secs",
            "12",
            "--max-candidates",
            "2",
        ]);
        let config = opt.apply(Config::default());
        assert_eq!(config.verify_deadline, Duration::from_secs(12));
        assert_eq!(config.max_candidates, 2);
        assert_eq!(opt.client_ip, "");
    }
}
