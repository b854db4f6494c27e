//! Application services - Use case implementations

mod address_search;
mod place_resolver;
mod trip_estimation;

pub use address_search::{
    AddressSearchSession, MAX_SILENT_QUERY_CHARS, SearchOutcome, SearchState,
};
pub use place_resolver::PlaceResolver;
pub use trip_estimation::{LocationStatus, TripEstimationSession, TripSnapshot};
