//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Current position could not be acquired (permission denied, timeout, hardware)
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// Transport or parse failure from an external provider
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Requested entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation exists as an interface point only
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if repeating the same action may succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ProviderError(_))
    }
}
