//! Place resolver
//!
//! Turns a suggestion id into coordinates through the place-details provider.

use std::sync::Arc;

use domain::Coordinate;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::PlaceDetailsPort;

/// Resolves opaque suggestion ids into coordinates
pub struct PlaceResolver {
    provider: Arc<dyn PlaceDetailsPort>,
}

impl std::fmt::Debug for PlaceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceResolver").finish_non_exhaustive()
    }
}

impl PlaceResolver {
    /// Create a resolver backed by a place-details provider
    pub fn new(provider: Arc<dyn PlaceDetailsPort>) -> Self {
        Self { provider }
    }

    /// Resolve a suggestion id into a coordinate
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` if the id is blank or the provider has
    ///   no result for it
    /// - `ApplicationError::ProviderError` on transport or parse failure
    #[instrument(skip(self))]
    pub async fn resolve(&self, suggestion_id: &str) -> Result<Coordinate, ApplicationError> {
        let suggestion_id = suggestion_id.trim();
        if suggestion_id.is_empty() {
            return Err(ApplicationError::NotFound(
                "place id must not be empty".to_string(),
            ));
        }

        match self.provider.place_coordinate(suggestion_id).await {
            Ok(Some(coordinate)) => {
                debug!(%coordinate, "Place resolved");
                Ok(coordinate)
            },
            Ok(None) => {
                warn!("Place details returned no result");
                Err(ApplicationError::NotFound(format!("place {suggestion_id}")))
            },
            Err(e) => {
                warn!(error = %e, "Place details lookup failed");
                Err(e)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockPlaceDetailsPort;

    #[tokio::test]
    async fn resolves_coordinate() {
        let mut provider = MockPlaceDetailsPort::new();
        provider
            .expect_place_coordinate()
            .withf(|id: &str| id == "place-1")
            .times(1)
            .returning(|_| Ok(Some(Coordinate::new(-23.5614, -46.6559).unwrap())));
        let resolver = PlaceResolver::new(Arc::new(provider));

        let coord = resolver.resolve("place-1").await.unwrap();

        assert!((coord.latitude() + 23.5614).abs() < f64::EPSILON);
        assert!((coord.longitude() + 46.6559).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn missing_result_is_not_found() {
        let mut provider = MockPlaceDetailsPort::new();
        provider.expect_place_coordinate().returning(|_| Ok(None));
        let resolver = PlaceResolver::new(Arc::new(provider));

        let result = resolver.resolve("place-404").await;

        assert!(matches!(result, Err(ApplicationError::NotFound(ref m)) if m.contains("place-404")));
    }

    #[tokio::test]
    async fn provider_error_is_propagated() {
        let mut provider = MockPlaceDetailsPort::new();
        provider
            .expect_place_coordinate()
            .returning(|_| Err(ApplicationError::ProviderError("HTTP 500".into())));
        let resolver = PlaceResolver::new(Arc::new(provider));

        let result = resolver.resolve("place-1").await;

        assert!(matches!(result, Err(ApplicationError::ProviderError(_))));
    }

    #[tokio::test]
    async fn blank_id_skips_provider() {
        let mut provider = MockPlaceDetailsPort::new();
        provider.expect_place_coordinate().never();
        let resolver = PlaceResolver::new(Arc::new(provider));

        let result = resolver.resolve("   ").await;

        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
