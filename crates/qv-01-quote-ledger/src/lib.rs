//! # Quote Ledger (qv-01)
//!
//! The Quote Ledger is the authoritative persistence boundary for user
//! quotes. It appends new quotes and evicts the oldest ones so the store
//! never settles above a fixed retention cap.
//!
//! ## Append path
//!
//! ```text
//! append(text, author)
//!     │
//!     ├─ re-validate input (integrity boundary)
//!     ├─ insert row           [atomic statement]
//!     ├─ count rows           [atomic statement]
//!     └─ count > cap?
//!          └─ prune to the cap newest ids   [atomic statement]
//! ```
//!
//! The three storage steps are deliberately NOT wrapped in one exclusive
//! transaction. Each statement is atomic on its own; racing writers can
//! overshoot the cap by at most (writers − 1) rows for one beat, and the
//! next append trims the store back under the cap. Strengthening this
//! into a global lock would trade availability for an invariant the
//! system does not need.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Bounded Retention | At most `cap` quotes survive any completed append |
//! | 2 | Id Monotonicity | Ids are unique, increasing, never reused |
//! | 3 | Eviction Order | Victims are always the smallest ids (oldest first) |
//! | 4 | Input Integrity | Empty text/author and >50-word text never reach the store |
//! | 5 | Seed Uniqueness | Initialization seeds exactly one default quote, once |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (validation, retention policy, errors)
//! - `ports/` - Port traits (inbound API, outbound store SPI)
//! - `adapters/` - In-memory store for unit tests
//! - `service.rs` - Application service implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use qv_01_quote_ledger::{InMemoryQuoteStore, LedgerConfig, LedgerService};
//!
//! let service = LedgerService::new(InMemoryQuoteStore::new(), LedgerConfig::default());
//! service.initialize()?;
//! let quote = service.append("Stay curious.", "Ada")?;
//! let newest_first = service.list()?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::memory::InMemoryQuoteStore;
pub use domain::errors::{LedgerError, ValidationError};
pub use domain::retention::RetentionPolicy;
pub use domain::value_objects::LedgerConfig;
pub use ports::inbound::QuoteLedgerApi;
pub use ports::outbound::{QuoteStore, StoreError};
pub use service::LedgerService;
