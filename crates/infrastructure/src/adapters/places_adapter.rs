//! Places adapter - Implements AutocompletePort and PlaceDetailsPort using integration_places

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{AutocompletePort, PlaceDetailsPort};
use async_trait::async_trait;
use domain::{Coordinate, Suggestion};
use integration_places::{GooglePlacesClient, PlacesClient, PlacesConfig, PlacesError};
use tracing::{debug, instrument};

/// Adapter for address search using a places web service
pub struct PlacesAdapter {
    client: Arc<dyn PlacesClient>,
}

impl std::fmt::Debug for PlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAdapter")
            .field("client", &"PlacesClient")
            .finish()
    }
}

impl PlacesAdapter {
    /// Create an adapter around an existing client
    pub fn new(client: Arc<dyn PlacesClient>) -> Self {
        Self { client }
    }

    /// Create an adapter backed by the Google Places web service
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &PlacesConfig) -> Result<Self, ApplicationError> {
        let client = GooglePlacesClient::new(config).map_err(|e| match e {
            PlacesError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ProviderError(other.to_string()),
        })?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map integration places error to application error
    fn map_error(err: PlacesError) -> ApplicationError {
        match err {
            PlacesError::NotFound(id) => ApplicationError::NotFound(format!("place {id}")),
            other => ApplicationError::ProviderError(other.to_string()),
        }
    }
}

#[async_trait]
impl AutocompletePort for PlacesAdapter {
    #[instrument(skip(self))]
    async fn autocomplete(&self, input: &str) -> Result<Vec<Suggestion>, ApplicationError> {
        let predictions = self
            .client
            .autocomplete(input)
            .await
            .map_err(Self::map_error)?;

        debug!(count = predictions.len(), "Mapped predictions to suggestions");
        Ok(predictions
            .into_iter()
            .map(|p| Suggestion::new(p.place_id, p.description))
            .collect())
    }
}

#[async_trait]
impl PlaceDetailsPort for PlacesAdapter {
    #[instrument(skip(self))]
    async fn place_coordinate(
        &self,
        place_id: &str,
    ) -> Result<Option<Coordinate>, ApplicationError> {
        match self.client.place_location(place_id).await {
            Ok(coordinate) => Ok(Some(coordinate)),
            Err(PlacesError::NotFound(_)) => Ok(None),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use integration_places::Prediction;
    use mockall::mock;

    use super::*;

    mock! {
        pub Places {}

        #[async_trait::async_trait]
        impl PlacesClient for Places {
            async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, PlacesError>;
            async fn place_location(&self, place_id: &str) -> Result<Coordinate, PlacesError>;
        }
    }

    fn prediction(id: &str, description: &str) -> Prediction {
        Prediction {
            place_id: id.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn predictions_become_suggestions() {
        let mut client = MockPlaces::new();
        client
            .expect_autocomplete()
            .withf(|input: &str| input == "Paulista")
            .returning(|_| {
                Ok(vec![
                    prediction("a", "Avenida Paulista"),
                    prediction("b", "Paulista Shopping"),
                ])
            });
        let adapter = PlacesAdapter::new(Arc::new(client));

        let suggestions = adapter.autocomplete("Paulista").await.unwrap();

        assert_eq!(
            suggestions,
            vec![
                Suggestion::new("a", "Avenida Paulista"),
                Suggestion::new("b", "Paulista Shopping"),
            ]
        );
    }

    #[tokio::test]
    async fn autocomplete_failure_is_provider_error() {
        let mut client = MockPlaces::new();
        client
            .expect_autocomplete()
            .returning(|_| Err(PlacesError::Timeout { timeout_secs: 10 }));
        let adapter = PlacesAdapter::new(Arc::new(client));

        let err = adapter.autocomplete("Paulista").await.unwrap_err();

        assert!(matches!(err, ApplicationError::ProviderError(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn denied_request_is_provider_error() {
        let mut client = MockPlaces::new();
        client
            .expect_autocomplete()
            .returning(|_| Err(PlacesError::RequestDenied("bad key".into())));
        let adapter = PlacesAdapter::new(Arc::new(client));

        assert!(matches!(
            adapter.autocomplete("Paulista").await,
            Err(ApplicationError::ProviderError(ref m)) if m.contains("bad key")
        ));
    }

    #[tokio::test]
    async fn place_coordinate_found() {
        let mut client = MockPlaces::new();
        client
            .expect_place_location()
            .returning(|_| Ok(Coordinate::new(-23.5614, -46.6559).unwrap()));
        let adapter = PlacesAdapter::new(Arc::new(client));

        let coordinate = adapter.place_coordinate("a").await.unwrap();

        assert!(coordinate.is_some());
    }

    #[tokio::test]
    async fn place_not_found_is_none() {
        let mut client = MockPlaces::new();
        client
            .expect_place_location()
            .returning(|id| Err(PlacesError::NotFound(id.to_string())));
        let adapter = PlacesAdapter::new(Arc::new(client));

        assert_eq!(adapter.place_coordinate("gone").await.unwrap(), None);
    }

    #[tokio::test]
    async fn place_parse_error_is_provider_error() {
        let mut client = MockPlaces::new();
        client
            .expect_place_location()
            .returning(|_| Err(PlacesError::ParseError("no geometry".into())));
        let adapter = PlacesAdapter::new(Arc::new(client));

        assert!(matches!(
            adapter.place_coordinate("a").await,
            Err(ApplicationError::ProviderError(_))
        ));
    }

    #[test]
    fn invalid_config_is_configuration_error() {
        let config = PlacesConfig {
            base_url: "not-a-url".to_string(),
            ..PlacesConfig::default()
        };
        assert!(matches!(
            PlacesAdapter::with_config(&config),
            Err(ApplicationError::Configuration(_))
        ));
    }
}
