//! # agora-common
//!
//! Shared utilities: configuration and telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{AppConfig, AppSettings, ConfigError, Environment, StoreConfig, UidConfig};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
