//! HTTP probe adapter.
//!
//! Probes `GET {base}/health` — the gateway's cheapest read-only
//! endpoint. Any 2xx counts as alive; everything else, including a
//! timeout, is a failure with the reason preserved.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::ports::{ProbeError, ProbePort};

/// Path probed on every candidate.
const HEALTH_PATH: &str = "/health";

/// reqwest-backed [`ProbePort`].
#[derive(Debug, Clone, Default)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProbePort for HttpProbe {
    async fn probe(&self, base_url: &str, timeout: Duration) -> Result<(), ProbeError> {
        let url = format!("{base_url}{HEALTH_PATH}");
        debug!("[qv-03] probing {url}");

        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeError::new(format!("probe timed out after {}ms", timeout.as_millis()))
                } else {
                    ProbeError::new(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeError::new(format!("unexpected status {status}")))
        }
    }
}
