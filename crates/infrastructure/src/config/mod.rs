//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `trip`: Fare pricing and map framing
//! - `location`: Fixed position for the configured location provider
//!
//! The places section reuses [`PlacesConfig`] from `integration_places` and
//! the logging section reuses [`LoggingConfig`] from the telemetry module.

mod location;
mod trip;

use application::ApplicationError;
use integration_places::PlacesConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use location::LocationConfig;
pub use trip::{FareConfig, ViewportConfig};

pub use crate::telemetry::{LogFormat, LoggingConfig};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TRIPQUOTE";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fare configuration
    #[serde(default)]
    pub fare: FareConfig,

    /// Places web service configuration
    #[serde(default)]
    pub places: PlacesConfig,

    /// Configured location provider
    #[serde(default)]
    pub location: LocationConfig,

    /// Map framing configuration
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from environment and an optional file
    ///
    /// `path` is passed to `config::File::with_name`, so the extension may be
    /// omitted. A missing file is not an error. Environment variables such as
    /// `TRIPQUOTE_FARE__UNIT_RATE` override file values.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        debug!(path, "Loading configuration");
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., TRIPQUOTE_PLACES__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first invalid section.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let sections = [
            ("fare", self.fare.validate()),
            ("places", self.places.validate()),
            ("location", self.location.validate()),
            ("viewport", self.viewport.validate()),
            ("logging", self.logging.validate()),
        ];

        for (section, result) in sections {
            result.map_err(|e| ApplicationError::Configuration(format!("{section}: {e}")))?;
        }

        Ok(())
    }
}
