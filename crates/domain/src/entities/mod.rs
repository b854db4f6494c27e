//! Domain entities

mod estimation;

pub use estimation::EstimationResult;
