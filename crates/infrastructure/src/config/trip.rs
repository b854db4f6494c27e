//! Trip configurations: Fare and Viewport.

use domain::{DEFAULT_EDGE_PADDING, DEFAULT_UNIT_RATE, DomainError, EdgePadding, FareModel};
use serde::{Deserialize, Serialize};

use super::default_true;

// ==============================
// Fare Configuration
// ==============================

/// Pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareConfig {
    /// Price per kilometre
    #[serde(default = "default_unit_rate")]
    pub unit_rate: f64,

    /// Symbol printed in front of fare amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

const fn default_unit_rate() -> f64 {
    DEFAULT_UNIT_RATE
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            unit_rate: default_unit_rate(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl FareConfig {
    /// Build the fare model for this configuration
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFareRate` for a negative or non-finite rate.
    pub fn fare_model(&self) -> Result<FareModel, DomainError> {
        FareModel::new(self.unit_rate)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.fare_model().map_err(|e| e.to_string())?;

        if self.currency_symbol.trim().is_empty() {
            return Err("currency_symbol must not be empty".to_string());
        }

        Ok(())
    }
}

// ==============================
// Viewport Configuration
// ==============================

/// Map framing configuration for searched destinations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Edge padding in points, applied on all four sides
    #[serde(default = "default_padding")]
    pub padding: f64,

    /// Animate the camera change
    #[serde(default = "default_true")]
    pub animated: bool,
}

const fn default_padding() -> f64 {
    DEFAULT_EDGE_PADDING
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            animated: true,
        }
    }
}

impl ViewportConfig {
    /// Padding as applied to each edge
    #[must_use]
    pub const fn edge_padding(&self) -> EdgePadding {
        EdgePadding::uniform(self.padding)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the padding is negative or not finite.
    pub fn validate(&self) -> Result<(), String> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            ));
        }
        Ok(())
    }
}
