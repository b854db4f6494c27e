//! Distance and fare estimate for a trip

use serde::{Deserialize, Serialize};

/// Distance and fare derived from the current position and a destination
///
/// Both fields are always non-negative and always produced together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Great-circle distance in kilometers
    pub distance_km: f64,
    /// Estimated fare in the configured currency
    pub fare_amount: f64,
}

impl EstimationResult {
    /// Create a new estimate, clamping negative or NaN inputs to zero
    #[must_use]
    pub fn new(distance_km: f64, fare_amount: f64) -> Self {
        Self {
            distance_km: non_negative(distance_km),
            fare_amount: non_negative(fare_amount),
        }
    }

    /// Distance rounded to two decimals, e.g. `"1.51 km"`
    #[must_use]
    pub fn format_distance(&self) -> String {
        format!("{:.2} km", self.distance_km)
    }

    /// Fare rounded to two decimals with a currency prefix, e.g. `"R$ 150.84"`
    #[must_use]
    pub fn format_fare(&self, currency_symbol: &str) -> String {
        format!("{currency_symbol} {:.2}", self.fare_amount)
    }

    /// Label for the destination marker on the map
    #[must_use]
    pub fn marker_label(&self) -> String {
        format!("Distance: {}", self.format_distance())
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
