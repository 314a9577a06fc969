//! # Resolver Service
//!
//! Sequential candidate probing with a sticky session cache.

use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::candidates::CandidateList;
use crate::domain::errors::{ProbeFailure, ResolveError};
use crate::domain::state::SessionState;
use crate::ports::ProbePort;

/// Resolver configuration.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Deadline for each individual probe. Short on purpose: an
    /// unreachable candidate must not stall discovery of a later,
    /// reachable one.
    pub probe_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_millis(1500),
        }
    }
}

/// Client-side endpoint resolver.
///
/// The session state lives behind an async mutex that is held for the
/// whole probe pass, which makes resolution single-flight: concurrent
/// callers queue behind the first and all receive its winner.
pub struct EndpointResolver<P: ProbePort> {
    candidates: CandidateList,
    probe: P,
    config: ResolverConfig,
    state: Mutex<SessionState>,
}

impl<P: ProbePort> EndpointResolver<P> {
    /// Create a resolver over `candidates`, probed with `probe`.
    pub fn new(candidates: CandidateList, probe: P, config: ResolverConfig) -> Self {
        Self {
            candidates,
            probe,
            config,
            state: Mutex::new(SessionState::Unresolved),
        }
    }

    /// Resolve a working base URL.
    ///
    /// Probes candidates strictly in list order and short-circuits on
    /// the first success; later candidates are never contacted. The
    /// winner is cached sticky: every later call returns it without
    /// probing. Total failure leaves the session `Unresolved`, so a
    /// later call starts a fresh pass.
    pub async fn resolve(&self) -> Result<String, ResolveError> {
        let mut state = self.state.lock().await;

        if let Some(url) = state.resolved_url() {
            debug!("[qv-03] reusing cached endpoint {url}");
            return Ok(url.to_string());
        }

        *state = SessionState::Resolving;

        let mut attempts = Vec::with_capacity(self.candidates.len());
        for candidate in self.candidates.iter() {
            match self.probe.probe(candidate, self.config.probe_timeout).await {
                Ok(()) => {
                    info!("[qv-03] resolved service endpoint: {candidate}");
                    *state = SessionState::Resolved(candidate.to_string());
                    return Ok(candidate.to_string());
                }
                Err(failure) => {
                    debug!("[qv-03] candidate {candidate} failed: {failure}");
                    attempts.push(ProbeFailure {
                        address: candidate.to_string(),
                        reason: failure.reason,
                    });
                }
            }
        }

        warn!(
            "[qv-03] no reachable endpoint among {} candidate(s)",
            self.candidates.len()
        );
        *state = SessionState::Unresolved;
        Err(ResolveError::Unreachable { attempts })
    }

    /// Snapshot of the session state (for diagnostics and tests).
    pub async fn session_state(&self) -> SessionState {
        self.state.lock().await.clone()
    }
}
