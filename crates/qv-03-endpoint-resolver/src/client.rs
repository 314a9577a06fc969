//! # Quote API Client
//!
//! Typed calls against a resolved endpoint. Resolution happens lazily on
//! the first call and is sticky; a failed invocation is reported as-is
//! and never triggers a hidden re-resolution — if the caller wants to
//! retry discovery, it builds a new session.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::errors::ResolveError;
use crate::ports::ProbePort;
use crate::service::EndpointResolver;

/// Path of the quotes collection on the service.
const QUOTES_PATH: &str = "/api/quotes";

/// A quote as the service serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: u64,
    pub text: String,
    pub author: String,
}

/// Body of a quote submission.
#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    text: &'a str,
    author: &'a str,
}

/// Error body the service sends on 4xx/5xx: `{"error": ...}`.
#[derive(Debug, Deserialize)]
struct WireError {
    error: String,
}

/// Client-side invocation failure.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No reachable endpoint; carries per-candidate detail.
    #[error(transparent)]
    Unresolved(#[from] ResolveError),

    /// The service rejected the submission (validation failure).
    #[error("submission rejected: {message}")]
    Rejected { message: String },

    /// The service answered with a server-side failure.
    #[error("service error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The request never completed (connect failure, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline for each invocation against the resolved endpoint.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// API client over a resolver session.
pub struct QuoteApiClient<P: ProbePort> {
    resolver: EndpointResolver<P>,
    http: reqwest::Client,
    config: ClientConfig,
}

impl<P: ProbePort> QuoteApiClient<P> {
    pub fn new(resolver: EndpointResolver<P>, http: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            resolver,
            http,
            config,
        }
    }

    /// The resolver backing this client.
    pub fn resolver(&self) -> &EndpointResolver<P> {
        &self.resolver
    }

    /// Fetch all retained quotes, newest first.
    pub async fn list_quotes(&self) -> Result<Vec<QuoteRecord>, ClientError> {
        let base = self.resolver.resolve().await?;
        let url = format!("{base}{QUOTES_PATH}");
        debug!("[qv-03] GET {url}");

        let response = self
            .http
            .get(&url)
            .timeout(self.config.request_timeout)
            .send()
            .await?;

        Self::expect_quotes(response, 200).await
    }

    /// Submit a quote; returns the post-insert, post-prune list.
    pub async fn submit_quote(
        &self,
        text: &str,
        author: &str,
    ) -> Result<Vec<QuoteRecord>, ClientError> {
        let base = self.resolver.resolve().await?;
        let url = format!("{base}{QUOTES_PATH}");
        debug!("[qv-03] POST {url}");

        let response = self
            .http
            .post(&url)
            .timeout(self.config.request_timeout)
            .json(&SubmitBody { text, author })
            .send()
            .await?;

        Self::expect_quotes(response, 201).await
    }

    async fn expect_quotes(
        response: reqwest::Response,
        expected: u16,
    ) -> Result<Vec<QuoteRecord>, ClientError> {
        let status = response.status();

        if status.as_u16() == expected {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<WireError>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("unexpected status {status}"));

        if status.is_client_error() {
            Err(ClientError::Rejected { message })
        } else {
            Err(ClientError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}
