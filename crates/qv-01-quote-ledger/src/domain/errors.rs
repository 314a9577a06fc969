//! Error types for the Quote Ledger subsystem.
//!
//! Two failure families cross the ledger boundary: bad input (the caller
//! can fix it) and storage failure (the caller can only retry). They are
//! kept as distinct variants so the HTTP layer can map them to 400 and
//! 500 without inspecting message strings.

use crate::ports::outbound::StoreError;

/// Rejected input, with the violated constraint named.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("quote text must not be empty")]
    EmptyText,

    #[error("quote author must not be empty")]
    EmptyAuthor,

    #[error("quote cannot exceed {limit} words (got {got})")]
    TooManyWords { got: usize, limit: usize },
}

/// Ledger operation failure.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Input failed re-validation at the integrity boundary.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backing store is unavailable or a statement failed.
    ///
    /// Never a partial success: the append either produced a stored quote
    /// or it did not. The ledger does not retry; retry policy belongs to
    /// the caller.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl LedgerError {
    /// True when the failure is user-correctable bad input.
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}
