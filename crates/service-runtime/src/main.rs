//! # Quote-Vault Service
//!
//! The main entry point for the Quote-Vault quote service.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (tracing subscriber)
//! 2. Load configuration from environment (all keys defaulted)
//! 3. Open the SQLite quote store
//! 4. Initialize the ledger — create-if-absent schema plus a one-time
//!    seed quote. Bootstrap failure is logged, NOT fatal: the service
//!    still starts and surfaces storage errors per request, and a later
//!    restart retries the bootstrap.
//! 5. Serve the HTTP API until Ctrl+C

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use qv_01_quote_ledger::{LedgerConfig, LedgerService, QuoteLedgerApi};
use qv_02_api_gateway::ApiGatewayService;
use service_runtime::adapters::storage::SqliteQuoteStore;
use service_runtime::container::ServiceConfig;
use vault_telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_telemetry(TelemetryConfig::from_env()).context("telemetry init failed")?;

    info!("===========================================");
    info!("  Quote-Vault Service v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let config = ServiceConfig::from_env();
    info!(
        db_path = %config.storage.path.display(),
        http_addr = %config.gateway.http_addr(),
        "Configuration loaded"
    );

    let store = SqliteQuoteStore::open(&config.storage).context("failed to open quote store")?;
    let ledger: Arc<dyn QuoteLedgerApi> =
        Arc::new(LedgerService::new(store, LedgerConfig::default()));

    // Bootstrap is idempotent and non-fatal: with the schema missing the
    // API answers 500s until a restart retries this, which beats not
    // starting at all while the store recovers.
    let bootstrap_ledger = Arc::clone(&ledger);
    match tokio::task::spawn_blocking(move || bootstrap_ledger.initialize()).await {
        Ok(Ok(())) => info!("Ledger initialized"),
        Ok(Err(e)) => error!("Ledger bootstrap failed (continuing): {e}"),
        Err(e) => error!("Ledger bootstrap task failed (continuing): {e}"),
    }

    let mut gateway =
        ApiGatewayService::new(config.gateway, ledger).context("gateway construction failed")?;

    // Dropping the serve future on Ctrl+C tears the listener down with
    // any in-flight handlers.
    tokio::select! {
        result = gateway.start() => {
            result.context("HTTP server error")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    info!("Quote-Vault stopped");
    Ok(())
}
