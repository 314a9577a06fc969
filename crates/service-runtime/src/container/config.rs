//! # Service Configuration
//!
//! Unified configuration for the runtime. Every knob has a sane default
//! and an environment override; an unset environment is a fully working
//! local setup.

use std::net::IpAddr;

use qv_02_api_gateway::GatewayConfig;

use crate::adapters::storage::SqliteStoreConfig;

/// Complete service configuration.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Storage configuration.
    pub storage: SqliteStoreConfig,
    /// API Gateway configuration.
    pub gateway: GatewayConfig,
}

impl ServiceConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// # Environment Variables
    ///
    /// - `QV_DB_PATH`: SQLite database file (default: ./data/quotes.db)
    /// - `QV_DB_POOL_SIZE`: connection pool size (default: 10)
    /// - `QV_DB_BUSY_TIMEOUT_MS`: per-statement busy timeout (default: 5000)
    /// - `QV_DB_ACQUIRE_TIMEOUT_MS`: pool acquire timeout (default: 5000)
    /// - `QV_HTTP_HOST`: gateway bind host (default: 0.0.0.0)
    /// - `QV_HTTP_PORT`: gateway bind port (default: 3001)
    /// - `QV_CORS_ORIGIN`: allowed CORS origin (default: *)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("QV_DB_PATH") {
            config.storage.path = path.into();
        }
        if let Ok(size) = std::env::var("QV_DB_POOL_SIZE") {
            if let Ok(n) = size.parse() {
                config.storage.pool_size = n;
            }
        }
        if let Ok(ms) = std::env::var("QV_DB_BUSY_TIMEOUT_MS") {
            if let Ok(n) = ms.parse() {
                config.storage.busy_timeout_ms = n;
            }
        }
        if let Ok(ms) = std::env::var("QV_DB_ACQUIRE_TIMEOUT_MS") {
            if let Ok(n) = ms.parse() {
                config.storage.acquire_timeout_ms = n;
            }
        }

        if let Ok(host) = std::env::var("QV_HTTP_HOST") {
            if let Ok(h) = host.parse::<IpAddr>() {
                config.gateway.http.host = h;
            }
        }
        if let Ok(port) = std::env::var("QV_HTTP_PORT") {
            if let Ok(p) = port.parse() {
                config.gateway.http.port = p;
            }
        }
        if let Ok(origin) = std::env::var("QV_CORS_ORIGIN") {
            config.gateway.cors.allowed_origins = vec![origin];
        }

        config
    }
}
