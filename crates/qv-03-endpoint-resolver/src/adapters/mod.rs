//! # Adapters
//!
//! - `http` - production probe over reqwest
//! - `mock` - scripted probe results for tests

pub mod http;
pub mod mock;

pub use http::HttpProbe;
pub use mock::MockProbePort;
