//! Place details port
//!
//! Resolves an opaque place id (as handed out by the autocomplete provider)
//! into coordinates.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the place-details provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaceDetailsPort: Send + Sync {
    /// Look up the coordinates of a place
    ///
    /// Returns `Ok(None)` when the provider has no result for the id.
    async fn place_coordinate(
        &self,
        place_id: &str,
    ) -> Result<Option<Coordinate>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PlaceDetailsPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PlaceDetailsPort>();
    }
}
