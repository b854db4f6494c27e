//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod configured_location_adapter;
mod logging_viewport_adapter;
mod places_adapter;

pub use configured_location_adapter::ConfiguredLocationAdapter;
pub use logging_viewport_adapter::LoggingViewportAdapter;
pub use places_adapter::PlacesAdapter;
