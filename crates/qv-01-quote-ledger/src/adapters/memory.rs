//! In-memory quote store for unit tests.
//!
//! Each port method takes the interior mutex exactly once, which makes
//! every call one atomic step — the same per-statement guarantee the
//! production SQLite adapter gives, with no durability.

use chrono::Utc;
use parking_lot::Mutex;
use std::collections::BTreeMap;

use crate::ports::outbound::{QuoteStore, StoreError};
use shared_types::{Quote, QuoteId};

#[derive(Default)]
struct Inner {
    /// Rows keyed by id; BTreeMap keeps them in id order.
    rows: BTreeMap<QuoteId, Quote>,
    /// Next id to hand out. Monotonic, never rewound on delete.
    next_id: QuoteId,
}

/// In-memory [`QuoteStore`].
#[derive(Default)]
pub struct InMemoryQuoteStore {
    inner: Mutex<Inner>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_locked(inner: &mut Inner, text: &str, author: &str) -> Quote {
        inner.next_id += 1;
        let quote = Quote {
            id: inner.next_id,
            text: text.to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
        };
        inner.rows.insert(quote.id, quote.clone());
        quote
    }
}

impl QuoteStore for InMemoryQuoteStore {
    fn create_if_absent(&self) -> Result<(), StoreError> {
        // The map exists from construction; creation is a no-op.
        Ok(())
    }

    fn seed_if_empty(&self, text: &str, author: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock();
        if !inner.rows.is_empty() {
            return Ok(false);
        }
        Self::insert_locked(&mut inner, text, author);
        Ok(true)
    }

    fn insert(&self, text: &str, author: &str) -> Result<Quote, StoreError> {
        let mut inner = self.inner.lock();
        Ok(Self::insert_locked(&mut inner, text, author))
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.lock().rows.len() as u64)
    }

    fn prune_to_newest(&self, keep: u64) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock();
        let len = inner.rows.len() as u64;
        if len <= keep {
            return Ok(0);
        }

        let excess = (len - keep) as usize;
        let victims: Vec<QuoteId> = inner.rows.keys().take(excess).copied().collect();
        for id in &victims {
            inner.rows.remove(id);
        }
        Ok(victims.len() as u64)
    }

    fn list_newest_first(&self) -> Result<Vec<Quote>, StoreError> {
        Ok(self.inner.lock().rows.values().rev().cloned().collect())
    }
}
