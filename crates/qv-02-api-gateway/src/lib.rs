//! # API Gateway (qv-02)
//!
//! The HTTP surface of Quote-Vault. Two routes carry the whole contract,
//! plus a health endpoint cheap enough for liveness probing:
//!
//! | Route | Success | Failure |
//! |-------|---------|---------|
//! | `GET /api/quotes` | 200, JSON array newest-first | 500 `{error}` |
//! | `POST /api/quotes` | 201, post-insert post-prune array | 400/500 `{error}` |
//! | `GET /health` | 200 | - |
//!
//! The gateway owns no quote logic: requests are validated for shape,
//! then handed to the ledger's inbound port. Ledger calls run on the
//! blocking pool because the storage engines behind the port are
//! synchronous.
//!
//! ## Crate Structure
//!
//! - `domain/` - Configuration, error-to-status mapping, wire DTOs
//! - `middleware/` - CORS layer construction
//! - `router.rs` - Routes and handlers
//! - `service.rs` - Server lifecycle (bind, serve, graceful shutdown)

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

// Re-export key types for convenience
pub use domain::config::{CorsConfig, GatewayConfig, HttpConfig, TimeoutConfig};
pub use domain::error::{ApiError, GatewayError};
pub use domain::types::{QuoteDto, SubmitQuoteRequest};
pub use router::{build_router, AppState};
pub use service::ApiGatewayService;
