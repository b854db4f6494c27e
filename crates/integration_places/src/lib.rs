//! Place search integration for TripQuote
//!
//! Provides address autocomplete and place-details lookup against the
//! [Google Places web service](https://developers.google.com/maps/documentation/places/web-service).
//!
//! # Architecture
//!
//! [`PlacesClient`] defines the interface for both lookups and is
//! implemented by [`GooglePlacesClient`]. The API key is part of
//! [`PlacesConfig`] and never appears in logs.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{GooglePlacesClient, PlacesClient, PlacesConfig};
//!
//! let config = PlacesConfig::default().with_api_key("my-key");
//! let client = GooglePlacesClient::new(&config)?;
//!
//! let predictions = client.autocomplete("Avenida Paulista").await?;
//! let location = client.place_location(&predictions[0].place_id).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GooglePlacesClient, PlacesClient};
pub use config::{MAX_CACHE_TTL_MINUTES, PlacesConfig};
pub use error::PlacesError;
pub use models::Prediction;
