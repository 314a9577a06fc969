//! Resolver error types.

use std::fmt;

/// One candidate that was probed and did not answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    /// The candidate base URL.
    pub address: String,
    /// Why the probe failed (connect error, timeout, non-2xx status).
    pub reason: String,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.address, self.reason)
    }
}

/// Endpoint resolution failure.
///
/// Carries every attempted candidate with its individual failure reason,
/// in candidate order, so the caller can show a real diagnostic instead
/// of a generic timeout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no candidate endpoint reachable ({})", format_attempts(.attempts))]
    Unreachable {
        /// Attempted candidates and their failures, in candidate order.
        attempts: Vec<ProbeFailure>,
    },
}

fn format_attempts(attempts: &[ProbeFailure]) -> String {
    if attempts.is_empty() {
        return "no candidates configured".to_string();
    }
    attempts
        .iter()
        .map(ProbeFailure::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
