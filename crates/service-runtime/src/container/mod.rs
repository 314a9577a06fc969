//! # Service Container
//!
//! Configuration for all subsystems and runtime parameters.

pub mod config;

pub use config::ServiceConfig;
