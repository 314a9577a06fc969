//! # Core Domain Entities
//!
//! The persisted quote record and its identifier type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the storage engine on insert.
///
/// Monotonically increasing, unique, never reused — eviction order is
/// id order, so id reuse would corrupt the retention invariant.
pub type QuoteId = u64;

/// A stored quote.
///
/// Created only by the ledger's append path; destroyed only by the
/// eviction step of a later append. There is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Store-assigned identifier.
    pub id: QuoteId,
    /// Quote text. Non-empty, at most 50 whitespace-separated words.
    pub text: String,
    /// Attribution. Non-empty.
    pub author: String,
    /// Insertion time. Audit/ordering display only — retention decisions
    /// are made on id order, never on this field.
    pub created_at: DateTime<Utc>,
}
