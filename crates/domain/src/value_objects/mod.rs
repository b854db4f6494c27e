//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod suggestion;
mod viewport;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, distance_km};
pub use suggestion::Suggestion;
pub use viewport::{
    DEFAULT_EDGE_PADDING, DEFAULT_REGION_DELTA, EdgePadding, MapRegion, ViewportCommand,
};
