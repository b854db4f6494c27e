//! Location provider port
//!
//! Defines how the application acquires the device's current position.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Outcome of asking the user for location access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    /// Access granted
    Granted,
    /// Access denied
    Denied,
}

/// Port for the device location provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Ask for permission to read the current position
    async fn request_permission(&self) -> PermissionStatus;

    /// Acquire the current position
    ///
    /// Fails with `ApplicationError::LocationUnavailable` on timeout or
    /// hardware failure.
    async fn current_position(&self) -> Result<Coordinate, ApplicationError>;
}
