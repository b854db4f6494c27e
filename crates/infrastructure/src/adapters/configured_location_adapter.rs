//! Configured location adapter - Implements LocationPort with a fixed position

use application::error::ApplicationError;
use application::ports::{LocationPort, PermissionStatus};
use async_trait::async_trait;
use domain::Coordinate;
use tracing::debug;

use crate::config::LocationConfig;

/// Location provider that reports a position taken from configuration
///
/// Without a configured position, permission is reported as denied.
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredLocationAdapter {
    position: Option<Coordinate>,
}

impl ConfiguredLocationAdapter {
    /// Create an adapter reporting the given position
    pub const fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }

    /// Create an adapter from the location configuration
    pub fn from_config(config: &LocationConfig) -> Self {
        Self::new(config.position())
    }
}

#[async_trait]
impl LocationPort for ConfiguredLocationAdapter {
    async fn request_permission(&self) -> PermissionStatus {
        if self.position.is_some() {
            PermissionStatus::Granted
        } else {
            debug!("No position configured, denying location permission");
            PermissionStatus::Denied
        }
    }

    async fn current_position(&self) -> Result<Coordinate, ApplicationError> {
        self.position.ok_or_else(|| {
            ApplicationError::LocationUnavailable("no position configured".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn configured_position_is_granted() {
        let adapter = ConfiguredLocationAdapter::from_config(&LocationConfig::fixed(-23.55, -46.63));

        assert_eq!(adapter.request_permission().await, PermissionStatus::Granted);
        let position = adapter.current_position().await.unwrap();
        assert!((position.latitude() + 23.55).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn missing_position_is_denied() {
        let adapter = ConfiguredLocationAdapter::from_config(&LocationConfig::default());

        assert_eq!(adapter.request_permission().await, PermissionStatus::Denied);
        assert!(matches!(
            adapter.current_position().await,
            Err(ApplicationError::LocationUnavailable(_))
        ));
    }
}
