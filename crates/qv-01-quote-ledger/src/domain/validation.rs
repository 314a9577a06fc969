//! Submission validation.
//!
//! The HTTP layer checks these rules first so users get fast feedback,
//! but the ledger re-validates everything: it is the integrity boundary
//! for what the store may contain, and it does not trust its callers.

use super::errors::ValidationError;

/// Count words by splitting on runs of whitespace.
///
/// `split_whitespace` discards empty tokens, so a string of only
/// whitespace counts zero words — such input is rejected by the
/// non-empty check, not the word-count check. No punctuation stripping
/// or normalization is applied to the raw text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Validate a quote submission against the ledger's input rules.
///
/// Checks run in a fixed order (text emptiness, text length, author
/// emptiness) so a submission violating several rules reports the same
/// constraint every time.
pub fn validate_submission(
    text: &str,
    author: &str,
    max_words: usize,
) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let words = word_count(text);
    if words > max_words {
        return Err(ValidationError::TooManyWords {
            got: words,
            limit: max_words,
        });
    }

    if author.trim().is_empty() {
        return Err(ValidationError::EmptyAuthor);
    }

    Ok(())
}
