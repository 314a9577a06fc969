//! Mock probe adapter for tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

use crate::ports::{ProbeError, ProbePort};

/// Scripted [`ProbePort`]: each base URL answers with a pre-configured
/// result, and every probe is recorded so tests can assert on ordering
/// and short-circuiting.
#[derive(Default)]
pub struct MockProbePort {
    results: HashMap<String, Result<(), ProbeError>>,
    probed: Mutex<Vec<String>>,
}

impl MockProbePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a candidate as alive.
    pub fn alive(mut self, base_url: &str) -> Self {
        self.results.insert(base_url.to_string(), Ok(()));
        self
    }

    /// Script a candidate as failing with `reason`.
    pub fn dead(mut self, base_url: &str, reason: &str) -> Self {
        self.results
            .insert(base_url.to_string(), Err(ProbeError::new(reason)));
        self
    }

    /// Every base URL probed so far, in call order.
    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().clone()
    }
}

#[async_trait]
impl ProbePort for MockProbePort {
    async fn probe(&self, base_url: &str, _timeout: Duration) -> Result<(), ProbeError> {
        self.probed.lock().push(base_url.to_string());
        self.results
            .get(base_url)
            .cloned()
            .unwrap_or_else(|| Err(ProbeError::new("unscripted candidate")))
    }
}
