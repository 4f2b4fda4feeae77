//! Verification orchestrator.
//!
//! Drives the postal-code candidates for a claimed region in order, stops at
//! the first proxy egress that geolocates to the claimed region, and otherwise
//! falls back to a direct lookup of the caller's own address. Every failure
//! along the way is absorbed; a verification always yields a result.

use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error_handling::{FailureKind, FailureTally, InitializationError};
use crate::geo::{discover_egress_ip, tunnel_geo, GeoResult, PlainLookup};
use crate::initialization::init_client;
use crate::net::mask_ip;
use crate::proxy::{CredentialChain, TunnelClient};
use crate::region::{candidates_limited, normalize_region};

use super::result::{Source, VerificationResult};

/// Terminal state of the proxy phase.
#[derive(Debug)]
enum ProxyPhase {
    Matched(GeoResult),
    Exhausted,
    DeadlineExceeded,
    Cancelled,
}

/// Per-candidate state machine.
enum CandidateStep {
    Credential,
    DirectGeo(TunnelClient),
    Discovery(TunnelClient),
    Matched(GeoResult),
    Exhausted,
}

/// Region verification engine.
///
/// Holds only immutable configuration, the credential strategies and the
/// direct HTTP client, so one instance can serve concurrent verifications.
pub struct Verifier {
    config: Config,
    credentials: CredentialChain,
    lookup: PlainLookup,
}

impl Verifier {
    /// Builds a verifier with the credential chain derived from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        let credentials = CredentialChain::from_config(&config, client.clone());
        Ok(Self::assemble(config, credentials, client))
    }

    /// Builds a verifier with an explicit credential chain.
    pub fn with_credentials(
        config: Config,
        credentials: CredentialChain,
    ) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self::assemble(config, credentials, client))
    }

    fn assemble(config: Config, credentials: CredentialChain, client: reqwest::Client) -> Self {
        let lookup = PlainLookup::new(
            client,
            &config.plain_lookup_base_url,
            config.plain_lookup_timeout,
        );
        Self {
            config,
            credentials,
            lookup,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Verifies `claimed_state` against the network-observed location.
    ///
    /// `client_ip` is the caller's observed address; it may be empty or
    /// private, in which case the fallback lookup resolves this host's own
    /// egress address.
    pub async fn verify(&self, claimed_state: &str, client_ip: &str) -> VerificationResult {
        self.verify_with_cancel(claimed_state, client_ip, &CancellationToken::new())
            .await
    }

    /// Like [`Verifier::verify`], aborting in-flight calls when `cancel` fires.
    ///
    /// A cancelled verification returns an all-"Unknown" client result
    /// without making further network calls.
    pub async fn verify_with_cancel(
        &self,
        claimed_state: &str,
        client_ip: &str,
        cancel: &CancellationToken,
    ) -> VerificationResult {
        let mut tally = FailureTally::new();
        let claimed = normalize_region(claimed_state);
        let claimed_code = claimed.map(|r| r.code).unwrap_or_default();
        if claimed.is_none() {
            debug!("Claimed region {:?} not recognized", claimed_state.trim());
        }

        let candidates = candidates_limited(claimed_code, self.config.max_candidates);
        debug!(
            "Claimed region {:?}: {} candidate(s) {:?}",
            claimed_code,
            candidates.len(),
            candidates
        );

        let phase = if cancel.is_cancelled() {
            ProxyPhase::Cancelled
        } else {
            tokio::select! {
                _ = cancel.cancelled() => ProxyPhase::Cancelled,
                outcome = tokio::time::timeout(
                    self.config.verify_deadline,
                    self.run_candidates(claimed_code, &candidates, &mut tally),
                ) => outcome.unwrap_or(ProxyPhase::DeadlineExceeded),
            }
        };

        let result = match phase {
            ProxyPhase::Matched(geo) => {
                VerificationResult::assemble(Source::Proxy, Some(&geo), "", claimed_code)
            }
            ProxyPhase::Cancelled => {
                warn!("Verification cancelled; reporting unknown");
                VerificationResult::assemble(Source::Client, None, client_ip, claimed_code)
            }
            ProxyPhase::Exhausted => {
                let geo = self.client_fallback(client_ip, cancel, &mut tally).await;
                VerificationResult::assemble(Source::Client, geo.as_ref(), client_ip, claimed_code)
            }
            ProxyPhase::DeadlineExceeded => {
                warn!(
                    "Proxy phase exceeded {:?}; abandoning remaining candidates",
                    self.config.verify_deadline
                );
                let geo = self.client_fallback(client_ip, cancel, &mut tally).await;
                VerificationResult::assemble(Source::Client, geo.as_ref(), client_ip, claimed_code)
            }
        };

        info!(
            "Verification claimed={:?} source={} observed={:?} ip={} match={} failures: {}",
            claimed_code,
            result.source,
            result.region_code,
            result.ip_masked,
            result.verdict,
            tally.summary()
        );
        result
    }

    async fn client_fallback(
        &self,
        client_ip: &str,
        cancel: &CancellationToken,
        tally: &mut FailureTally,
    ) -> Option<GeoResult> {
        let outcome = tokio::select! {
            _ = cancel.cancelled() => return None,
            outcome = self.lookup.try_lookup(client_ip) => outcome,
        };
        match outcome {
            Ok(geo) => Some(geo),
            Err(e) => {
                warn!("Client geolocation failed for {}: {}", mask_ip(client_ip), e);
                tally.record(e.kind());
                None
            }
        }
    }

    /// Tries candidates strictly in order; the first match ends the phase.
    async fn run_candidates(
        &self,
        claimed_code: &str,
        candidates: &[&str],
        tally: &mut FailureTally,
    ) -> ProxyPhase {
        for postal in candidates {
            if let Some(geo) = self.try_candidate(postal, claimed_code, tally).await {
                info!(
                    "Candidate {} matched region {} via proxy {}",
                    postal,
                    claimed_code,
                    mask_ip(&geo.ip)
                );
                return ProxyPhase::Matched(geo);
            }
            info!("Candidate {} exhausted without a region match", postal);
        }
        ProxyPhase::Exhausted
    }

    async fn try_candidate(
        &self,
        postal: &str,
        claimed_code: &str,
        tally: &mut FailureTally,
    ) -> Option<GeoResult> {
        let mut step = CandidateStep::Credential;
        loop {
            step = match step {
                CandidateStep::Credential => match self.credentials.resolve(postal).await {
                    Ok(credential) => match TunnelClient::new(
                        &credential,
                        self.config.tunnel_timeout,
                        &self.config.user_agent,
                    ) {
                        Ok(tunnel) => CandidateStep::DirectGeo(tunnel),
                        Err(e) => {
                            warn!("Cannot build tunnel to {}: {}", credential.endpoint(), e);
                            tally.record(FailureKind::TunnelRequestFailed);
                            CandidateStep::Exhausted
                        }
                    },
                    Err(e) => {
                        debug!("No credential for postal {}: {}", postal, e);
                        tally.record(FailureKind::CredentialUnavailable);
                        CandidateStep::Exhausted
                    }
                },
                CandidateStep::DirectGeo(tunnel) => {
                    match tunnel_geo(&tunnel, &self.config.tunnel_geo_url).await {
                        Ok(geo) if geo.matches(claimed_code) => CandidateStep::Matched(geo),
                        Ok(geo) => {
                            debug!(
                                "Postal {}: tunnel geo reported {:?}, expected {:?}",
                                postal, geo.region_code, claimed_code
                            );
                            CandidateStep::Discovery(tunnel)
                        }
                        Err(e) => {
                            debug!("Postal {}: tunnel geo failed: {}", postal, e);
                            tally.record(e.kind());
                            CandidateStep::Discovery(tunnel)
                        }
                    }
                }
                CandidateStep::Discovery(tunnel) => {
                    match discover_egress_ip(&tunnel, &self.config.ip_echo_urls).await {
                        Ok(ip) => match self.lookup.try_lookup_address(ip.into()).await {
                            Ok(geo) if geo.matches(claimed_code) => CandidateStep::Matched(geo),
                            Ok(geo) => {
                                debug!(
                                    "Postal {}: egress {} geolocates to {:?}",
                                    postal,
                                    mask_ip(&ip.to_string()),
                                    geo.region_code
                                );
                                CandidateStep::Exhausted
                            }
                            Err(e) => {
                                debug!("Postal {}: egress lookup failed: {}", postal, e);
                                tally.record(e.kind());
                                CandidateStep::Exhausted
                            }
                        },
                        Err(e) => {
                            debug!("Postal {}: {}", postal, e);
                            tally.record(e.kind());
                            CandidateStep::Exhausted
                        }
                    }
                }
                CandidateStep::Matched(geo) => return Some(geo),
                CandidateStep::Exhausted => return None,
            };
        }
    }
}
