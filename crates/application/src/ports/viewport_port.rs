//! Map viewport port

use domain::ViewportCommand;
#[cfg(test)]
use mockall::automock;

/// Port for the map view collaborator
///
/// Commands are fire-and-forget; the map applies them or ignores them.
#[cfg_attr(test, automock)]
pub trait ViewportPort: Send + Sync {
    /// Frame the two points of the command
    fn fit_to_coordinates(&self, command: &ViewportCommand);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ViewportPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ViewportPort>();
    }
}
