//! Places web service client
//!
//! Autocomplete is never cached: every call reaches the service. Place
//! details are cached by place id when `cache_ttl_minutes` is non-zero.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use moka::future::Cache;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::models::{Prediction, RawAutocompleteResponse, RawDetailsResponse, check_status};

/// Trait for place search clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Fetch address predictions for free-form input
    async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, PlacesError>;

    /// Look up the coordinates of a place by id
    ///
    /// Fails with `PlacesError::NotFound` if the response carries no result.
    async fn place_location(&self, place_id: &str) -> Result<Coordinate, PlacesError>;
}

/// Client for the Google Places web service
#[derive(Debug)]
pub struct GooglePlacesClient {
    client: Client,
    config: PlacesConfig,
    details_cache: Option<Cache<String, Coordinate>>,
}

impl GooglePlacesClient {
    /// Create a new places client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("TripQuote/0.1")
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        let details_cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(config.cache_ttl_minutes.saturating_mul(60)))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            details_cache,
        })
    }

    fn api_key(&self) -> Result<&str, PlacesError> {
        self.config
            .api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PlacesError::ConfigurationError("places API key is not set".into()))
    }

    /// Issue a GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let url = format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlacesError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    PlacesError::ConnectionFailed(e.to_string())
                }
            })?;

        let response = Self::check_http_status(response)?;

        let body = response
            .text()
            .await
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| PlacesError::ParseError(e.to_string()))
    }

    fn check_http_status(response: Response) -> Result<Response, PlacesError> {
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlacesError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status == reqwest::StatusCode::FORBIDDEN || status == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(PlacesError::RequestDenied(format!("HTTP {status}")));
        }

        if !status.is_success() {
            return Err(PlacesError::RequestFailed(format!("HTTP {status}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    #[instrument(skip(self))]
    async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, PlacesError> {
        let key = self.api_key()?;

        let mut params = vec![("input", input), ("key", key)];
        if let Some(language) = self.config.language.as_deref() {
            params.push(("language", language));
        }

        debug!("Requesting autocomplete");
        let raw: RawAutocompleteResponse = self.get_json("autocomplete/json", &params).await?;
        check_status(raw.status.as_deref(), raw.error_message.as_deref())?;

        let predictions = raw.predictions.unwrap_or_default();
        debug!(count = predictions.len(), "Autocomplete predictions received");
        Ok(predictions)
    }

    #[instrument(skip(self))]
    async fn place_location(&self, place_id: &str) -> Result<Coordinate, PlacesError> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(PlacesError::NotFound("place id must not be empty".into()));
        }

        if let Some(cache) = &self.details_cache
            && let Some(coordinate) = cache.get(place_id).await
        {
            debug!("Place details cache hit");
            return Ok(coordinate);
        }

        let key = self.api_key()?;
        let mut params = vec![("place_id", place_id), ("key", key), ("fields", "geometry")];
        if let Some(language) = self.config.language.as_deref() {
            params.push(("language", language));
        }

        debug!("Requesting place details");
        let raw: RawDetailsResponse = self.get_json("details/json", &params).await?;
        check_status(raw.status.as_deref(), raw.error_message.as_deref())?;

        let Some(place) = raw.result else {
            warn!("Place details response has no result");
            return Err(PlacesError::NotFound(place_id.to_string()));
        };

        let location = place
            .geometry
            .ok_or_else(|| PlacesError::ParseError("result has no geometry".into()))?
            .location;

        let coordinate = Coordinate::new(location.lat, location.lng)
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;

        if let Some(cache) = &self.details_cache {
            cache.insert(place_id.to_string(), coordinate).await;
        }
        debug!(%coordinate, "Place resolved");
        Ok(coordinate)
    }
}
