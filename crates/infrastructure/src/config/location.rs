//! Location configuration

use domain::Coordinate;
use serde::{Deserialize, Serialize};

/// Fixed position reported by the configured location provider
///
/// With both fields absent the provider reports permission as denied and
/// the session runs without a current position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude (-90.0 to 90.0)
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude (-180.0 to 180.0)
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LocationConfig {
    /// Create a configuration with a fixed position
    #[must_use]
    pub const fn fixed(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// The configured position, if both coordinates are set and valid
    #[must_use]
    pub fn position(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude).ok(),
            _ => None,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if only one coordinate is set or the pair is out of range.
    pub fn validate(&self) -> Result<(), String> {
        match (self.latitude, self.longitude) {
            (None, None) => Ok(()),
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude)
                .map(|_| ())
                .map_err(|e| e.to_string()),
            _ => Err("latitude and longitude must be set together".to_string()),
        }
    }
}
