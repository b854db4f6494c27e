//! Viewport adapter for headless front-ends
//!
//! Logs each framing request and keeps the most recent one so a caller
//! without a real map can report it.

use application::ports::ViewportPort;
use domain::ViewportCommand;
use parking_lot::Mutex;
use tracing::info;

/// Viewport collaborator that records instead of rendering
#[derive(Debug, Default)]
pub struct LoggingViewportAdapter {
    last: Mutex<Option<ViewportCommand>>,
}

impl LoggingViewportAdapter {
    /// Create an adapter with no recorded command
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent command received
    pub fn last_command(&self) -> Option<ViewportCommand> {
        *self.last.lock()
    }
}

impl ViewportPort for LoggingViewportAdapter {
    fn fit_to_coordinates(&self, command: &ViewportCommand) {
        info!(
            from = %command.point_a,
            to = %command.point_b,
            padding = command.padding.top,
            animated = command.animated,
            "Fit map to coordinates"
        );
        *self.last.lock() = Some(*command);
    }
}
