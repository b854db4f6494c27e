//! Application layer - Use cases and orchestration
//!
//! Contains the trip-estimation workflow: the address search session, the
//! place resolver and the trip estimation session that ties them to the
//! current position. External systems are reached only through the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
