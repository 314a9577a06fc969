//! # Middleware
//!
//! Tower layers applied around the router.

pub mod cors;

pub use cors::create_cors_layer;
