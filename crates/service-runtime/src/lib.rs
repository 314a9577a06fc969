//! # Quote-Vault Service Runtime
//!
//! The host application: owns configuration, the production storage
//! adapter, and the wiring between the ledger and the HTTP gateway.
//!
//! ## Modular Structure
//!
//! - `container/` - Service configuration loaded from the environment
//! - `adapters/` - Production port implementations (SQLite quote store)
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry
//! 2. Load configuration (defaults, overridden by environment)
//! 3. Open the SQLite store (pool of connections, WAL mode)
//! 4. Initialize the ledger (create-if-absent + seed); failures here are
//!    logged, not fatal — the service can still serve existing data
//! 5. Start the API gateway and run until Ctrl+C

pub mod adapters;
pub mod container;

pub use adapters::storage::{SqliteQuoteStore, SqliteStoreConfig};
pub use container::config::ServiceConfig;
