//! # Production Adapters
//!
//! Production implementations of the ledger's outbound ports.

pub mod storage;

pub use storage::{SqliteQuoteStore, SqliteStoreConfig};
