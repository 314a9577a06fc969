//! # SQLite Storage Adapter
//!
//! Production implementation of the ledger's `QuoteStore` port.
//!
//! ## Guarantees
//!
//! - Every port method is ONE SQL statement, atomic on its own. The
//!   ledger's insert/count/prune sequence runs without a wrapping
//!   transaction; racing writers interleave safely at statement
//!   granularity.
//! - `AUTOINCREMENT` ids: strictly increasing, never reused after
//!   deletes. Eviction order depends on this.
//! - Bounded waits everywhere: a per-statement busy timeout and a pool
//!   acquire deadline. Expiry surfaces as `StoreError::Timeout`, never
//!   a hang.
//!
//! ## Connections
//!
//! A fixed pool of connections is opened up front, each in WAL mode.
//! WAL admits concurrent readers alongside a single writer, which fits
//! the workload: every append is three short statements, every read is
//! one.

use chrono::{DateTime, Utc};
use parking_lot::{Condvar, Mutex};
use rusqlite::{params, Connection, OpenFlags, Row};
use std::ops::Deref;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

use qv_01_quote_ledger::{QuoteStore, StoreError};
use shared_types::Quote;

/// Schema SQL embedded at compile time.
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// SQLite store configuration.
#[derive(Debug, Clone)]
pub struct SqliteStoreConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Number of pooled connections.
    pub pool_size: usize,
    /// Per-statement busy timeout in milliseconds.
    pub busy_timeout_ms: u64,
    /// Pool acquire timeout in milliseconds.
    pub acquire_timeout_ms: u64,
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/quotes.db"),
            pool_size: 10,
            busy_timeout_ms: 5000,
            acquire_timeout_ms: 5000,
        }
    }
}

impl SqliteStoreConfig {
    /// Config for tests: small pool, short waits, caller-owned path.
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pool_size: 2,
            busy_timeout_ms: 500,
            acquire_timeout_ms: 500,
        }
    }
}

/// Fixed-size connection pool with a bounded acquire wait.
struct ConnectionPool {
    connections: Mutex<Vec<Connection>>,
    available: Condvar,
    acquire_timeout: Duration,
}

impl ConnectionPool {
    fn new(connections: Vec<Connection>, acquire_timeout: Duration) -> Self {
        Self {
            connections: Mutex::new(connections),
            available: Condvar::new(),
            acquire_timeout,
        }
    }

    fn acquire(&self) -> Result<PooledConnection<'_>, StoreError> {
        let deadline = Instant::now() + self.acquire_timeout;
        let mut connections = self.connections.lock();

        loop {
            if let Some(conn) = connections.pop() {
                return Ok(PooledConnection {
                    conn: Some(conn),
                    pool: self,
                });
            }

            if self
                .available
                .wait_until(&mut connections, deadline)
                .timed_out()
            {
                return Err(StoreError::Timeout {
                    operation: "connection acquire",
                    waited_ms: self.acquire_timeout.as_millis() as u64,
                });
            }
        }
    }

    fn release(&self, conn: Connection) {
        self.connections.lock().push(conn);
        self.available.notify_one();
    }
}

/// A connection checked out of the pool; returns itself on drop.
struct PooledConnection<'a> {
    conn: Option<Connection>,
    pool: &'a ConnectionPool,
}

impl Deref for PooledConnection<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        // Present from construction until drop.
        self.conn.as_ref().expect("connection present until drop")
    }
}

impl Drop for PooledConnection<'_> {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            self.pool.release(conn);
        }
    }
}

/// SQLite-backed [`QuoteStore`].
pub struct SqliteQuoteStore {
    pool: ConnectionPool,
    busy_timeout_ms: u64,
}

impl SqliteQuoteStore {
    /// Open (creating if needed) the database file and the connection
    /// pool.
    pub fn open(config: &SqliteStoreConfig) -> Result<Self, StoreError> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Unavailable {
                    reason: format!("cannot create data directory: {e}"),
                })?;
            }
        }

        let pool_size = config.pool_size.max(1);
        let mut connections = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            connections.push(Self::open_connection(config)?);
        }

        info!(
            path = %config.path.display(),
            pool_size,
            "Opened SQLite quote store"
        );

        Ok(Self {
            pool: ConnectionPool::new(
                connections,
                Duration::from_millis(config.acquire_timeout_ms),
            ),
            busy_timeout_ms: config.busy_timeout_ms,
        })
    }

    fn open_connection(config: &SqliteStoreConfig) -> Result<Connection, StoreError> {
        let conn = Connection::open_with_flags(
            &config.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )
        .map_err(|e| StoreError::Unavailable {
            reason: format!("cannot open database: {e}"),
        })?;

        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(|e| StoreError::Unavailable {
                reason: format!("cannot set busy timeout: {e}"),
            })?;

        // journal_mode returns the resulting mode as a row.
        let _mode: String = conn
            .query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))
            .map_err(|e| StoreError::Unavailable {
                reason: format!("cannot enable WAL: {e}"),
            })?;

        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(|e| StoreError::Unavailable {
                reason: format!("cannot set synchronous mode: {e}"),
            })?;

        Ok(conn)
    }

    fn map_sql_err(&self, operation: &'static str, err: rusqlite::Error) -> StoreError {
        match err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::DatabaseBusy =>
            {
                StoreError::Timeout {
                    operation,
                    waited_ms: self.busy_timeout_ms,
                }
            }
            other => StoreError::Statement {
                reason: other.to_string(),
            },
        }
    }

    fn row_to_quote(row: &Row<'_>) -> rusqlite::Result<Quote> {
        let id: i64 = row.get(0)?;
        let created_at: i64 = row.get(3)?;

        Ok(Quote {
            // AUTOINCREMENT ids are non-negative by construction.
            id: id as u64,
            text: row.get(1)?,
            author: row.get(2)?,
            created_at: DateTime::<Utc>::from_timestamp(created_at, 0)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        })
    }
}

impl QuoteStore for SqliteQuoteStore {
    fn create_if_absent(&self) -> Result<(), StoreError> {
        let conn = self.pool.acquire()?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| self.map_sql_err("create table", e))
    }

    fn seed_if_empty(&self, text: &str, author: &str) -> Result<bool, StoreError> {
        let conn = self.pool.acquire()?;
        let inserted = conn
            .execute(
                "INSERT INTO quotes (text, author)
                 SELECT ?1, ?2
                 WHERE NOT EXISTS (SELECT 1 FROM quotes)",
                params![text, author],
            )
            .map_err(|e| self.map_sql_err("seed", e))?;
        Ok(inserted > 0)
    }

    fn insert(&self, text: &str, author: &str) -> Result<Quote, StoreError> {
        let conn = self.pool.acquire()?;
        conn.query_row(
            "INSERT INTO quotes (text, author) VALUES (?1, ?2)
             RETURNING id, text, author, created_at",
            params![text, author],
            Self::row_to_quote,
        )
        .map_err(|e| self.map_sql_err("insert", e))
    }

    fn count(&self) -> Result<u64, StoreError> {
        let conn = self.pool.acquire()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))
            .map_err(|e| self.map_sql_err("count", e))?;
        Ok(count as u64)
    }

    fn prune_to_newest(&self, keep: u64) -> Result<u64, StoreError> {
        let conn = self.pool.acquire()?;
        let deleted = conn
            .execute(
                "DELETE FROM quotes
                 WHERE id NOT IN (SELECT id FROM quotes ORDER BY id DESC LIMIT ?1)",
                params![keep as i64],
            )
            .map_err(|e| self.map_sql_err("prune", e))?;
        Ok(deleted as u64)
    }

    fn list_newest_first(&self) -> Result<Vec<Quote>, StoreError> {
        let conn = self.pool.acquire()?;
        let mut stmt = conn
            .prepare("SELECT id, text, author, created_at FROM quotes ORDER BY id DESC")
            .map_err(|e| self.map_sql_err("list", e))?;

        let quotes = stmt
            .query_map([], Self::row_to_quote)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| self.map_sql_err("list", e))?;

        Ok(quotes)
    }
}
