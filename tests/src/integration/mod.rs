//! # Integration Tests
//!
//! Cross-crate flows exercised the way production wires them.

pub mod gateway_http;
pub mod ledger_retention;
pub mod resolver_discovery;
