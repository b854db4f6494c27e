//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod autocomplete_port;
mod location_port;
mod place_details_port;
mod viewport_port;

#[cfg(test)]
pub use autocomplete_port::MockAutocompletePort;
pub use autocomplete_port::AutocompletePort;
#[cfg(test)]
pub use location_port::MockLocationPort;
pub use location_port::{LocationPort, PermissionStatus};
#[cfg(test)]
pub use place_details_port::MockPlaceDetailsPort;
pub use place_details_port::PlaceDetailsPort;
#[cfg(test)]
pub use viewport_port::MockViewportPort;
pub use viewport_port::ViewportPort;
