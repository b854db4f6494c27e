//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the places adapter, the configured location provider, the
//! headless viewport, configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, FareConfig, LocationConfig, ViewportConfig};
pub use telemetry::{LogFormat, LoggingConfig, LoggingError, init_logging};
