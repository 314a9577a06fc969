//! # Inbound Port (Driving Port)
//!
//! The API the Quote Ledger offers its host application. The HTTP
//! gateway consumes this trait; tests substitute the service with any
//! other implementor.

use crate::domain::errors::LedgerError;
use shared_types::Quote;

/// Public API of the quote ledger.
///
/// All methods are synchronous: the storage engines behind the ledger
/// are blocking, and async callers are expected to move calls onto a
/// blocking-capable thread themselves.
pub trait QuoteLedgerApi: Send + Sync {
    /// Idempotent bootstrap: create the backing schema if absent and
    /// seed a single default quote iff the ledger is empty.
    ///
    /// Safe to call repeatedly and concurrently.
    fn initialize(&self) -> Result<(), LedgerError>;

    /// Validate and store a new quote, then trim the store back to the
    /// retention cap if the insert pushed it over.
    ///
    /// Returns the newly created quote with its store-assigned id.
    fn append(&self, text: &str, author: &str) -> Result<Quote, LedgerError>;

    /// All retained quotes, most recent id first.
    fn list(&self) -> Result<Vec<Quote>, LedgerError>;
}
