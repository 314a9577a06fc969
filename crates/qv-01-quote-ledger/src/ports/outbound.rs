//! # Outbound Port (Driven Port)
//!
//! The storage interface the Quote Ledger requires the host application
//! to provide.
//!
//! Production: `SqliteQuoteStore` (service-runtime/adapters/storage/sqlite_adapter.rs)
//! Testing: `InMemoryQuoteStore` (adapters/memory.rs)
//!
//! ## Atomicity contract
//!
//! Every method maps to ONE atomic storage statement. The ledger builds
//! its insert-then-count-then-prune sequence out of these atoms without
//! any cross-statement transaction, so implementations must guarantee
//! per-statement atomicity but nothing across statements.
//!
//! ## Timeout contract
//!
//! No method may block indefinitely. Implementations carry their own
//! bounded timeouts (busy handlers, pool acquire deadlines) and surface
//! expiry as [`StoreError::Timeout`].

use shared_types::Quote;

/// Abstract interface for quote persistence.
pub trait QuoteStore: Send + Sync {
    /// Create the backing table/collection if it does not exist.
    ///
    /// "Create if not exists" semantics: repeated and concurrent calls
    /// must all succeed.
    fn create_if_absent(&self) -> Result<(), StoreError>;

    /// Insert exactly one row iff the store is currently empty.
    ///
    /// The emptiness check and the insert are one atomic statement, so
    /// racing callers cannot both seed. Returns `true` when this call
    /// performed the insert.
    fn seed_if_empty(&self, text: &str, author: &str) -> Result<bool, StoreError>;

    /// Insert a new quote; the store assigns the next id and the
    /// creation timestamp. Returns the stored row.
    fn insert(&self, text: &str, author: &str) -> Result<Quote, StoreError>;

    /// Current number of stored quotes.
    fn count(&self) -> Result<u64, StoreError>;

    /// Delete every row whose id is not among the `keep` largest.
    ///
    /// Returns the number of rows deleted. A no-op (store already at or
    /// under `keep`) returns 0.
    fn prune_to_newest(&self, keep: u64) -> Result<u64, StoreError>;

    /// All quotes ordered by id descending.
    fn list_newest_first(&self) -> Result<Vec<Quote>, StoreError>;
}

/// Storage failure as seen through the port.
///
/// Retryable from the caller's point of view; the ledger itself never
/// retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The engine cannot be reached or opened.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// A statement was executed and failed.
    #[error("statement failed: {reason}")]
    Statement { reason: String },

    /// A bounded wait (busy handler, pool acquire) expired.
    #[error("{operation} timed out after {waited_ms}ms")]
    Timeout {
        operation: &'static str,
        waited_ms: u64,
    },
}
