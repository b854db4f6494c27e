//! Trip estimation session
//!
//! Holds the current position and the destination, keeps the distance and
//! fare estimate in sync with them, and asks the map to frame the trip when
//! a destination comes from search.
//!
//! Destination and estimate are always written under the same lock, so a
//! reader never observes one without the other.

use std::sync::Arc;

use domain::{Coordinate, EdgePadding, EstimationResult, FareModel, MapRegion, ViewportCommand};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::address_search::AddressSearchSession;
use super::place_resolver::PlaceResolver;
use crate::error::ApplicationError;
use crate::ports::{LocationPort, PermissionStatus, ViewportPort};

/// Availability of the current position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "position")]
pub enum LocationStatus {
    /// `initialize` has not completed yet
    Pending,
    /// Position acquired
    Available(Coordinate),
    /// Acquisition failed; search works, estimation does not
    Unavailable,
}

impl LocationStatus {
    /// The acquired position, if any
    pub const fn position(&self) -> Option<Coordinate> {
        match self {
            Self::Available(position) => Some(*position),
            Self::Pending | Self::Unavailable => None,
        }
    }
}

/// Consistent view of the session state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripSnapshot {
    /// Current position, if acquired
    pub current_position: Option<Coordinate>,
    /// Active destination
    pub destination: Option<Coordinate>,
    /// Estimate for the active destination
    pub estimate: Option<EstimationResult>,
}

#[derive(Debug)]
struct TripState {
    location: LocationStatus,
    destination: Option<Coordinate>,
    estimate: Option<EstimationResult>,
}

/// Stateful trip-estimation workflow for one map screen
pub struct TripEstimationSession {
    location: Arc<dyn LocationPort>,
    search: AddressSearchSession,
    resolver: PlaceResolver,
    viewport: Option<Arc<dyn ViewportPort>>,
    fare_model: FareModel,
    viewport_padding: EdgePadding,
    viewport_animated: bool,
    state: Mutex<TripState>,
}

impl std::fmt::Debug for TripEstimationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripEstimationSession")
            .field("search", &self.search)
            .field("resolver", &self.resolver)
            .field("has_viewport", &self.viewport.is_some())
            .field("fare_model", &self.fare_model)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl TripEstimationSession {
    /// Create a new session
    pub fn new(
        location: Arc<dyn LocationPort>,
        search: AddressSearchSession,
        resolver: PlaceResolver,
        fare_model: FareModel,
    ) -> Self {
        Self {
            location,
            search,
            resolver,
            viewport: None,
            fare_model,
            viewport_padding: EdgePadding::default(),
            viewport_animated: true,
            state: Mutex::new(TripState {
                location: LocationStatus::Pending,
                destination: None,
                estimate: None,
            }),
        }
    }

    /// Attach the map view that receives viewport commands
    #[must_use]
    pub fn with_viewport(mut self, viewport: Arc<dyn ViewportPort>) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Override the padding used when framing a searched destination
    #[must_use]
    pub const fn with_viewport_padding(mut self, padding: EdgePadding) -> Self {
        self.viewport_padding = padding;
        self
    }

    /// Override whether viewport changes are animated
    #[must_use]
    pub const fn with_viewport_animation(mut self, animated: bool) -> Self {
        self.viewport_animated = animated;
        self
    }

    /// Acquire the current position once
    ///
    /// After a successful call the position is fixed; later calls return it
    /// without asking the provider again. After a failure the session runs
    /// in degraded mode and `initialize` may be retried.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::LocationUnavailable` if permission is
    /// denied or the position cannot be acquired.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<Coordinate, ApplicationError> {
        if let Some(position) = self.state.lock().location.position() {
            debug!(%position, "Position already acquired");
            return Ok(position);
        }

        match self.acquire_position().await {
            Ok(position) => {
                let mut state = self.state.lock();
                if let Some(existing) = state.location.position() {
                    return Ok(existing);
                }
                state.location = LocationStatus::Available(position);
                state.estimate = state
                    .destination
                    .map(|destination| self.estimate_between(&position, &destination));
                info!(%position, "Current position acquired");
                Ok(position)
            },
            Err(e) => {
                warn!(error = %e, "Running without current position");
                let mut state = self.state.lock();
                if state.location.position().is_none() {
                    state.location = LocationStatus::Unavailable;
                }
                Err(e)
            },
        }
    }

    async fn acquire_position(&self) -> Result<Coordinate, ApplicationError> {
        if self.location.request_permission().await == PermissionStatus::Denied {
            return Err(ApplicationError::LocationUnavailable(
                "location permission denied".to_string(),
            ));
        }

        self.location.current_position().await.map_err(|e| match e {
            ApplicationError::LocationUnavailable(_) => e,
            other => ApplicationError::LocationUnavailable(other.to_string()),
        })
    }

    /// Set the destination chosen through address search
    ///
    /// Recomputes the estimate and, when the current position is known,
    /// frames both points on the map.
    #[instrument(skip(self))]
    pub fn set_destination_from_resolved(&self, coordinate: Coordinate) -> Option<EstimationResult> {
        let (estimate, origin) = self.apply_destination(coordinate);

        if let (Some(origin), Some(viewport)) = (origin, &self.viewport) {
            let command = ViewportCommand::fit(origin, coordinate)
                .with_padding(self.viewport_padding)
                .with_animation(self.viewport_animated);
            viewport.fit_to_coordinates(&command);
        }

        estimate
    }

    /// Set the destination tapped on the map
    ///
    /// Recomputes the estimate. The viewport is left where the user put it.
    #[instrument(skip(self))]
    pub fn set_destination_from_tap(&self, coordinate: Coordinate) -> Option<EstimationResult> {
        self.apply_destination(coordinate).0
    }

    fn apply_destination(
        &self,
        destination: Coordinate,
    ) -> (Option<EstimationResult>, Option<Coordinate>) {
        let mut state = self.state.lock();
        let origin = state.location.position();
        state.destination = Some(destination);
        state.estimate = origin.map(|origin| self.estimate_between(&origin, &destination));

        match state.estimate {
            Some(estimate) => debug!(
                distance_km = estimate.distance_km,
                fare = estimate.fare_amount,
                "Estimate updated"
            ),
            None => debug!("Destination set without current position"),
        }

        (state.estimate, origin)
    }

    fn estimate_between(&self, origin: &Coordinate, destination: &Coordinate) -> EstimationResult {
        let distance_km = origin.distance_km(destination);
        EstimationResult::new(distance_km, self.fare_model.estimate_fare(distance_km))
    }

    /// Select a suggestion, resolve it and make it the destination
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if the suggestion is unknown or
    /// resolves to nothing, and `ApplicationError::ProviderError` if the
    /// lookup fails. Destination, estimate and the suggestion set are
    /// unchanged in both cases, so the same selection can be retried.
    #[instrument(skip(self))]
    pub async fn select_suggestion(
        &self,
        suggestion_id: &str,
    ) -> Result<Option<EstimationResult>, ApplicationError> {
        let suggestion = self.search.find_suggestion(suggestion_id)?;
        let coordinate = self.resolver.resolve(&suggestion.id).await?;
        self.search.commit_selection(&suggestion);
        Ok(self.set_destination_from_resolved(coordinate))
    }

    /// Remove the destination, its estimate and any pending suggestions
    pub fn clear_destination(&self) {
        {
            let mut state = self.state.lock();
            state.destination = None;
            state.estimate = None;
        }
        self.search.clear_suggestions();
        debug!("Destination cleared");
    }

    /// Find a driver for the current trip
    ///
    /// # Errors
    ///
    /// Always returns `ApplicationError::NotImplemented`.
    pub fn request_match(&self) -> Result<(), ApplicationError> {
        info!("Match requested");
        Err(ApplicationError::NotImplemented(
            "driver matching is not available yet".to_string(),
        ))
    }

    /// Address search feeding this session
    pub const fn search(&self) -> &AddressSearchSession {
        &self.search
    }

    /// Pricing used for estimates
    pub const fn fare_model(&self) -> &FareModel {
        &self.fare_model
    }

    /// Current position, if acquired
    pub fn current_position(&self) -> Option<Coordinate> {
        self.state.lock().location.position()
    }

    /// Active destination
    pub fn destination(&self) -> Option<Coordinate> {
        self.state.lock().destination
    }

    /// Estimate for the active destination
    pub fn estimate(&self) -> Option<EstimationResult> {
        self.state.lock().estimate
    }

    /// Availability of the current position
    pub fn location_status(&self) -> LocationStatus {
        self.state.lock().location
    }

    /// Whether position acquisition failed
    pub fn is_degraded(&self) -> bool {
        self.location_status() == LocationStatus::Unavailable
    }

    /// Region the map should show first
    pub fn initial_region(&self) -> Option<MapRegion> {
        self.current_position().map(MapRegion::around)
    }

    /// Position, destination and estimate read together
    pub fn snapshot(&self) -> TripSnapshot {
        let state = self.state.lock();
        TripSnapshot {
            current_position: state.location.position(),
            destination: state.destination,
            estimate: state.estimate,
        }
    }
}
