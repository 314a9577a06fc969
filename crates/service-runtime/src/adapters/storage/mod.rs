//! # Production Storage Adapters
//!
//! SQLite-backed implementation of the ledger's `QuoteStore` port.
//! The in-memory adapter used by unit tests lives with the ledger crate.

pub mod sqlite_adapter;

pub use sqlite_adapter::{SqliteQuoteStore, SqliteStoreConfig};
