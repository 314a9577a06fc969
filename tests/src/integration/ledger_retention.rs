//! # Retention Invariant Flows
//!
//! The bounded-ledger invariant checked over both store adapters: the
//! in-memory test double and the production SQLite adapter. Whatever
//! the storage engine, a completed append never leaves more than the
//! cap behind, and survivors are exactly the newest ids.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qv_01_quote_ledger::{
        InMemoryQuoteStore, LedgerConfig, LedgerService, QuoteLedgerApi, QuoteStore,
    };
    use service_runtime::adapters::storage::{SqliteQuoteStore, SqliteStoreConfig};

    fn config_with_cap(cap: u64) -> LedgerConfig {
        LedgerConfig {
            cap,
            ..LedgerConfig::default()
        }
    }

    fn check_retention_sequence<S: QuoteStore>(service: &LedgerService<S>, cap: u64) {
        // Below the cap, every append grows the store by exactly one.
        for n in 1..=cap {
            service.append(&format!("quote {n}"), "A").unwrap();
            assert_eq!(service.list().unwrap().len() as u64, n);
        }

        // Past the cap, every append converges back to the cap, and the
        // survivors are the newest ids in descending order.
        for n in (cap + 1)..=(cap + 4) {
            service.append(&format!("quote {n}"), "A").unwrap();

            let quotes = service.list().unwrap();
            assert_eq!(quotes.len() as u64, cap);

            let ids: Vec<_> = quotes.iter().map(|q| q.id).collect();
            let expected: Vec<_> = ((n - cap + 1)..=n).rev().collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn retention_holds_over_the_memory_store() {
        let service = LedgerService::new(InMemoryQuoteStore::new(), config_with_cap(5));
        check_retention_sequence(&service, 5);
    }

    #[test]
    fn retention_holds_over_the_sqlite_store() {
        let dir = tempfile::tempdir().unwrap();
        let store =
            SqliteQuoteStore::open(&SqliteStoreConfig::for_testing(dir.path().join("q.db")))
                .unwrap();
        let service = LedgerService::new(store, config_with_cap(5));
        service.initialize().unwrap();

        // The seed occupies one slot like any other quote.
        assert_eq!(service.list().unwrap().len(), 1);

        for n in 1..=10u64 {
            service.append(&format!("quote {n}"), "A").unwrap();
        }

        let quotes = service.list().unwrap();
        assert_eq!(quotes.len(), 5);
        let ids: Vec<_> = quotes.iter().map(|q| q.id).collect();
        // Seed was id 1; ten appends made ids 2..=11; the newest five
        // survive.
        assert_eq!(ids, vec![11, 10, 9, 8, 7]);
    }

    #[test]
    fn initialize_twice_seeds_once_on_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let store =
            SqliteQuoteStore::open(&SqliteStoreConfig::for_testing(dir.path().join("q.db")))
                .unwrap();
        let service = LedgerService::new(store, LedgerConfig::default());

        service.initialize().unwrap();
        service.initialize().unwrap();

        let quotes = service.list().unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, 1);
    }

    #[test]
    fn concurrent_appends_converge_to_the_cap() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteQuoteStore::open(&SqliteStoreConfig {
            path: dir.path().join("q.db"),
            pool_size: 4,
            busy_timeout_ms: 5000,
            acquire_timeout_ms: 5000,
        })
        .unwrap();
        let service = Arc::new(LedgerService::new(store, config_with_cap(5)));
        service.initialize().unwrap();

        // Four writers, twenty appends total — far past the cap, with
        // the insert/count/prune sequences freely interleaving.
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for i in 0..5 {
                        service.append(&format!("t{t}-q{i}"), "A").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Transient overshoot is allowed mid-flight, but once every
        // append has completed the store sits exactly at the cap.
        let quotes = service.list().unwrap();
        assert_eq!(quotes.len(), 5);

        // Survivors are the five largest ids that were ever assigned.
        let ids: Vec<_> = quotes.iter().map(|q| q.id).collect();
        // Seed (1) + 20 appends = ids 1..=21.
        assert_eq!(ids, vec![21, 20, 19, 18, 17]);
    }
}
