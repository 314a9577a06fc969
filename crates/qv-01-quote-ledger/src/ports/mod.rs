//! # Ports
//!
//! - `inbound` - the API this subsystem offers (driving port)
//! - `outbound` - the storage SPI this subsystem requires (driven port)

pub mod inbound;
pub mod outbound;

pub use inbound::QuoteLedgerApi;
pub use outbound::{QuoteStore, StoreError};
