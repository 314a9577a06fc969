//! # Quote-Vault Test Suite
//!
//! Unified test crate containing cross-crate flows:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── ledger_retention.rs   # Retention invariant over both stores
//!     ├── gateway_http.rs       # HTTP contract on a real listener
//!     └── resolver_discovery.rs # Client discovery + end-to-end flow
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qv-tests
//!
//! # By category
//! cargo test -p qv-tests integration::
//! ```

pub mod integration;
