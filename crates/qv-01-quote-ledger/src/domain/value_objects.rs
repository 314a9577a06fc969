//! Configuration value objects for the ledger.

use super::retention::RetentionPolicy;

/// Default retention cap.
pub const DEFAULT_CAP: u64 = 50;

/// Default word limit for submitted text.
pub const DEFAULT_MAX_WORDS: usize = 50;

/// The quote seeded into an empty ledger on first initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedQuote {
    pub text: String,
    pub author: String,
}

impl Default for SeedQuote {
    fn default() -> Self {
        Self {
            text: "Never give up, no matter how hard life gets no matter how \
                   much pain you feel. Pain will eventually subside, nothing \
                   remains forever, so keep going and don't give up."
                .to_string(),
            author: "Imran Khan".to_string(),
        }
    }
}

/// Ledger configuration.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Maximum number of quotes retained.
    pub cap: u64,
    /// Maximum whitespace-separated words in submitted text.
    pub max_words: usize,
    /// Quote seeded when the ledger is initialized empty.
    pub seed: SeedQuote,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            max_words: DEFAULT_MAX_WORDS,
            seed: SeedQuote::default(),
        }
    }
}

impl LedgerConfig {
    /// Retention policy derived from this configuration.
    pub fn retention(&self) -> RetentionPolicy {
        RetentionPolicy::new(self.cap)
    }
}
