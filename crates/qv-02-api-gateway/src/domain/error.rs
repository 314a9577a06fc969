//! Gateway error types and their HTTP mapping.
//!
//! The error taxonomy on the wire is deliberately small: a 400 means the
//! submitter can fix the request, a 500 means the backing store let us
//! down. Both carry a human-readable `{"error": ...}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use qv_01_quote_ledger::LedgerError;

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An error ready to leave the gateway as an HTTP response.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status for this failure.
    pub status: StatusCode,
    /// Message placed in the `{error}` body.
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Bad request - the submitter can correct and retry.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Internal error - the backing store failed; retryable.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(v) => Self::bad_request(v.to_string()),
            LedgerError::Storage(s) => {
                tracing::error!("[qv-02] ledger storage failure: {s}");
                Self::internal(format!("storage failure: {s}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Gateway lifecycle error (startup/shutdown, not per-request).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
