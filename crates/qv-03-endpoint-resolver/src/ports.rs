//! # Probe Port (Driven Port)
//!
//! Abstracts the single liveness check so the resolver's sequencing
//! logic stays free of network I/O.

use async_trait::async_trait;
use std::time::Duration;

/// Port for probing one candidate base URL.
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe `base_url` with a bounded timeout.
    ///
    /// `Ok(())` means the candidate answered with a 2xx-equivalent
    /// response inside the deadline. Any other outcome (connect failure,
    /// timeout, non-2xx status) is an error carrying a reason usable in
    /// a diagnostic.
    async fn probe(&self, base_url: &str, timeout: Duration) -> Result<(), ProbeError>;
}

/// A failed probe of one candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ProbeError {
    /// Human-readable failure reason.
    pub reason: String,
}

impl ProbeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
