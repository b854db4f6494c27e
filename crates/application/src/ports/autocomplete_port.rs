//! Address autocomplete port

use async_trait::async_trait;
use domain::Suggestion;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the address autocomplete provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AutocompletePort: Send + Sync {
    /// Fetch address suggestions for free-form input text
    ///
    /// An empty list means the provider had no results; it is not an error.
    async fn autocomplete(&self, input: &str) -> Result<Vec<Suggestion>, ApplicationError>;
}
