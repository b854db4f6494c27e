//! Domain layer for TripQuote
//!
//! Contains the value objects and pure computations of trip estimation:
//! coordinates and great-circle distance, the fare model, address
//! suggestions and viewport commands. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod fare_model;
pub mod value_objects;

pub use entities::EstimationResult;
pub use errors::DomainError;
pub use fare_model::{DEFAULT_UNIT_RATE, FareModel};
pub use value_objects::*;
