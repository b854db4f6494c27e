//! Places API wire models

use serde::{Deserialize, Serialize};

use crate::error::PlacesError;

/// An autocomplete prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Opaque place id, usable with the details endpoint
    pub place_id: String,
    /// Human-readable address
    pub description: String,
}

/// Raw autocomplete response
///
/// `predictions` may be absent entirely; that means "no results".
#[derive(Debug, Deserialize)]
pub(crate) struct RawAutocompleteResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub predictions: Option<Vec<Prediction>>,
}

/// Raw place-details response
#[derive(Debug, Deserialize)]
pub(crate) struct RawDetailsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<RawPlace>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlace {
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    pub location: RawLatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Map the service-level `status` field to an error
///
/// `OK`, `ZERO_RESULTS`, `NOT_FOUND` and a missing status pass through;
/// callers decide what an empty payload means.
pub(crate) fn check_status(
    status: Option<&str>,
    error_message: Option<&str>,
) -> Result<(), PlacesError> {
    let detail = || error_message.unwrap_or_default().to_string();
    match status {
        None | Some("OK" | "ZERO_RESULTS" | "NOT_FOUND") => Ok(()),
        Some("OVER_QUERY_LIMIT") => Err(PlacesError::RateLimitExceeded {
            retry_after_secs: None,
        }),
        Some("REQUEST_DENIED") => Err(PlacesError::RequestDenied(detail())),
        Some("INVALID_REQUEST") => Err(PlacesError::RequestFailed(format!(
            "invalid request: {}",
            detail()
        ))),
        Some(other) => Err(PlacesError::RequestFailed(format!("{other}: {}", detail()))),
    }
}
