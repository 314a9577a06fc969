//! # Endpoint Resolver (qv-03)
//!
//! Client-side discovery of a reachable Quote-Vault instance. A caller
//! hands the resolver an ordered list of candidate base URLs (local
//! port, container hostname, loopback); the resolver probes them
//! strictly in order, adopts the first that answers, and keeps that
//! winner for the rest of the session.
//!
//! ## Session state machine
//!
//! ```text
//! Unresolved ──resolve()──→ Resolving ──first 2xx──→ Resolved(url)
//!     ↑                         │
//!     └─────all probes fail─────┘
//! ```
//!
//! `Resolved` is sticky: nothing transitions out of it. A process
//! restart is the only way back to `Unresolved`. When the cached winner
//! later fails, invocations report the failure to the caller instead of
//! silently re-probing — retry policy stays visible and bounded.
//!
//! ## Crate Structure
//!
//! - `domain/` - Candidate list, session state, error taxonomy
//! - `ports.rs` - Probe port (driven)
//! - `adapters/` - reqwest probe, scripted mock probe
//! - `service.rs` - The resolver itself
//! - `client.rs` - Typed API client over a resolved endpoint

pub mod adapters;
pub mod client;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::http::HttpProbe;
pub use adapters::mock::MockProbePort;
pub use client::{ClientConfig, ClientError, QuoteApiClient, QuoteRecord};
pub use domain::candidates::CandidateList;
pub use domain::errors::{ProbeFailure, ResolveError};
pub use domain::state::SessionState;
pub use ports::{ProbeError, ProbePort};
pub use service::{EndpointResolver, ResolverConfig};
