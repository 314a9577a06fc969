//! # Ledger Application Service
//!
//! Implements [`QuoteLedgerApi`] over any [`QuoteStore`], composing the
//! domain rules (validation, retention) with the storage atoms.

use tracing::{debug, info, warn};

use crate::domain::errors::LedgerError;
use crate::domain::retention::RetentionPolicy;
use crate::domain::validation::validate_submission;
use crate::domain::value_objects::LedgerConfig;
use crate::ports::inbound::QuoteLedgerApi;
use crate::ports::outbound::QuoteStore;
use shared_types::Quote;

/// The quote ledger service.
///
/// Owns a storage port and the retention policy. Holds no quote state of
/// its own: every call goes to the store, so concurrent instances over
/// the same store observe the same rows.
pub struct LedgerService<S: QuoteStore> {
    store: S,
    config: LedgerConfig,
    retention: RetentionPolicy,
}

impl<S: QuoteStore> LedgerService<S> {
    /// Create a service over `store` with the given configuration.
    pub fn new(store: S, config: LedgerConfig) -> Self {
        let retention = config.retention();
        Self {
            store,
            config,
            retention,
        }
    }

    /// Retention cap currently enforced.
    pub fn cap(&self) -> u64 {
        self.retention.cap()
    }
}

impl<S: QuoteStore> QuoteLedgerApi for LedgerService<S> {
    fn initialize(&self) -> Result<(), LedgerError> {
        self.store.create_if_absent()?;

        let seeded = self
            .store
            .seed_if_empty(&self.config.seed.text, &self.config.seed.author)?;
        if seeded {
            info!("[qv-01] seeded empty ledger with default quote");
        } else {
            debug!("[qv-01] ledger already populated, seed skipped");
        }

        Ok(())
    }

    fn append(&self, text: &str, author: &str) -> Result<Quote, LedgerError> {
        // The HTTP layer has already validated, but the ledger is the
        // integrity boundary for the stored invariant and re-checks.
        validate_submission(text, author, self.config.max_words)?;

        let quote = self.store.insert(text, author)?;
        debug!("[qv-01] appended quote #{}", quote.id);

        // Count and prune as separate atomic statements. Racing appends
        // may each observe an overshoot and prune; the statement keeps
        // the newest `cap` ids, so double-pruning deletes nothing extra.
        let count = self.store.count()?;
        if self.retention.over_cap(count) {
            let deleted = self.store.prune_to_newest(self.retention.cap())?;
            if deleted > 0 {
                info!(
                    "[qv-01] pruned {} old quote(s) to hold the {}-quote cap",
                    deleted,
                    self.retention.cap()
                );
            } else {
                // Another writer pruned between our count and delete.
                warn!("[qv-01] prune raced with a concurrent writer, nothing left to trim");
            }
        }

        Ok(quote)
    }

    fn list(&self) -> Result<Vec<Quote>, LedgerError> {
        Ok(self.store.list_newest_first()?)
    }
}
