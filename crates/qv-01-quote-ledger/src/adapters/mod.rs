//! # Adapters
//!
//! In-crate adapters for the outbound storage port. The production
//! SQLite adapter lives in the service runtime; only the in-memory test
//! double is defined here.

pub mod memory;

pub use memory::InMemoryQuoteStore;
