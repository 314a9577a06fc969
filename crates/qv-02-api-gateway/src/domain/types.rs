//! Wire types for the quotes API.

use serde::{Deserialize, Serialize};
use shared_types::Quote;

/// A quote as served on the wire: `{id, text, author}`.
///
/// `created_at` stays internal; clients order by the array position the
/// server already sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDto {
    pub id: u64,
    pub text: String,
    pub author: String,
}

impl From<Quote> for QuoteDto {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            text: quote.text,
            author: quote.author,
        }
    }
}

/// Body of `POST /api/quotes`.
///
/// Fields are optional at the serde layer so a missing field becomes a
/// 400 with a readable message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitQuoteRequest {
    pub text: Option<String>,
    pub author: Option<String>,
}
