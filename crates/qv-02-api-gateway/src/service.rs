//! API Gateway service - server lifecycle.
//!
//! Binds the listener, layers middleware over the router, serves until a
//! shutdown signal arrives.

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::create_cors_layer;
use crate::router::{build_router, AppState};
use qv_01_quote_ledger::QuoteLedgerApi;

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    ledger: Arc<dyn QuoteLedgerApi>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiGatewayService {
    /// Create a new API Gateway service
    pub fn new(
        config: GatewayConfig,
        ledger: Arc<dyn QuoteLedgerApi>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            config,
            ledger,
            shutdown_tx: None,
        })
    }

    /// Build the router with the middleware stack applied.
    ///
    /// Exposed so tests can bind an ephemeral port and serve the exact
    /// router production runs.
    pub fn router(&self) -> Router {
        let state = AppState {
            ledger: Arc::clone(&self.ledger),
        };

        let middleware = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&self.config.cors))
            .layer(TimeoutLayer::new(self.config.timeouts.request));

        build_router(state).layer(middleware)
    }

    /// Bind the configured address and serve until shutdown.
    ///
    /// Returns the error that stopped the server; a triggered shutdown
    /// returns `Ok(())`.
    pub async fn start(&mut self) -> Result<(), GatewayError> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr).await?;
        info!(addr = %addr, "Starting HTTP server");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Received shutdown signal");
            })
            .await?;

        info!("API Gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
