//! # Vault Telemetry
//!
//! Structured logging bootstrap for Quote-Vault.
//!
//! Every crate logs through the `tracing` facade; this crate owns the
//! one-time subscriber installation so binaries get consistent output
//! (pretty for terminals, JSON for containers) from a single call.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vault_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("telemetry init");
//!     // tracing::info! etc. now reach the configured subscriber
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QV_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `QV_JSON_LOGS` | auto | JSON output (defaults on in containers) |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{init_telemetry, TelemetryError, TracingGuard};
