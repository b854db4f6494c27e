//! Linear distance-to-price conversion

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Unit rate of the observed pricing policy (currency units per kilometer)
pub const DEFAULT_UNIT_RATE: f64 = 100.0;

/// Deterministic linear pricing: `fare = distance_km * unit_rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareModel {
    unit_rate: f64,
}

impl FareModel {
    /// Create a fare model with the given rate per kilometer
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFareRate` if the rate is negative,
    /// infinite or NaN.
    pub fn new(unit_rate: f64) -> Result<Self, DomainError> {
        if !unit_rate.is_finite() || unit_rate < 0.0 {
            return Err(DomainError::InvalidFareRate(unit_rate));
        }
        Ok(Self { unit_rate })
    }

    /// Rate per kilometer
    #[must_use]
    pub const fn unit_rate(&self) -> f64 {
        self.unit_rate
    }

    /// Estimate the fare for a distance in kilometers
    ///
    /// Negative distances are treated as zero.
    #[must_use]
    pub fn estimate_fare(&self, distance_km: f64) -> f64 {
        distance_km.max(0.0) * self.unit_rate
    }
}

impl Default for FareModel {
    fn default() -> Self {
        Self {
            unit_rate: DEFAULT_UNIT_RATE,
        }
    }
}
