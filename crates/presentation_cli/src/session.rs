//! Session wiring for the CLI

use std::sync::Arc;

use application::{AddressSearchSession, PlaceResolver, TripEstimationSession};
use infrastructure::{AppConfig, ConfiguredLocationAdapter, LoggingViewportAdapter, PlacesAdapter};

/// A trip session together with the collaborators the CLI reports on
#[derive(Debug)]
pub struct TripContext {
    /// The session driven by the subcommands
    pub session: TripEstimationSession,
    /// Records the framing requested for searched destinations
    pub viewport: Arc<LoggingViewportAdapter>,
    /// Symbol printed in front of fares
    pub currency_symbol: String,
}

impl TripContext {
    /// Wire a session from configuration
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let places = Arc::new(PlacesAdapter::with_config(&config.places)?);
        let viewport = Arc::new(LoggingViewportAdapter::new());

        let session = TripEstimationSession::new(
            Arc::new(ConfiguredLocationAdapter::from_config(&config.location)),
            AddressSearchSession::new(places.clone()),
            PlaceResolver::new(places),
            config.fare.fare_model()?,
        )
        .with_viewport(viewport.clone())
        .with_viewport_padding(config.viewport.edge_padding())
        .with_viewport_animation(config.viewport.animated);

        Ok(Self {
            session,
            viewport,
            currency_symbol: config.fare.currency_symbol.clone(),
        })
    }
}
