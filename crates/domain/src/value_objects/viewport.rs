//! Map viewport value objects

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Default padding, in map units, applied on each side when framing a trip
pub const DEFAULT_EDGE_PADDING: f64 = 50.0;

/// Default latitude/longitude span of the initial map region in degrees
pub const DEFAULT_REGION_DELTA: f64 = 0.01;

/// Padding around the framed points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePadding {
    /// Top padding
    pub top: f64,
    /// Right padding
    pub right: f64,
    /// Bottom padding
    pub bottom: f64,
    /// Left padding
    pub left: f64,
}

impl EdgePadding {
    /// Same padding on all four sides
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Whether all four sides carry the same padding
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_symmetric(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }
}

impl Default for EdgePadding {
    fn default() -> Self {
        Self::uniform(DEFAULT_EDGE_PADDING)
    }
}

/// Request to the map view to frame two points
///
/// Fire-and-forget: the map collaborator applies it, nothing stores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportCommand {
    /// First point to keep visible (the current position)
    pub point_a: Coordinate,
    /// Second point to keep visible (the destination)
    pub point_b: Coordinate,
    /// Padding around the framed points
    pub padding: EdgePadding,
    /// Whether the map should animate the transition
    pub animated: bool,
}

impl ViewportCommand {
    /// Frame two points with the default padding, animated
    #[must_use]
    pub fn fit(point_a: Coordinate, point_b: Coordinate) -> Self {
        Self {
            point_a,
            point_b,
            padding: EdgePadding::default(),
            animated: true,
        }
    }

    /// Override the padding
    #[must_use]
    pub const fn with_padding(mut self, padding: EdgePadding) -> Self {
        self.padding = padding;
        self
    }

    /// Override the animation flag
    #[must_use]
    pub const fn with_animation(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}

/// Region the map centres on when it is first shown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    /// Centre of the region
    pub center: Coordinate,
    /// Visible latitude span in degrees
    pub latitude_delta: f64,
    /// Visible longitude span in degrees
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Region around `center` with the default span
    #[must_use]
    pub const fn around(center: Coordinate) -> Self {
        Self {
            center,
            latitude_delta: DEFAULT_REGION_DELTA,
            longitude_delta: DEFAULT_REGION_DELTA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_padding_is_symmetric() {
        let padding = EdgePadding::uniform(50.0);
        assert!(padding.is_symmetric());
        assert_eq!(padding, EdgePadding::default());
    }

    #[test]
    fn uneven_padding_is_not_symmetric() {
        let padding = EdgePadding {
            top: 10.0,
            ..EdgePadding::uniform(50.0)
        };
        assert!(!padding.is_symmetric());
    }

    #[test]
    fn fit_uses_default_padding_and_animates() {
        let a = Coordinate::sao_paulo();
        let b = Coordinate::rio_de_janeiro();
        let cmd = ViewportCommand::fit(a, b);
        assert_eq!(cmd.point_a, a);
        assert_eq!(cmd.point_b, b);
        assert!((cmd.padding.left - DEFAULT_EDGE_PADDING).abs() < f64::EPSILON);
        assert!(cmd.animated);
    }

    #[test]
    fn builder_overrides() {
        let cmd = ViewportCommand::fit(Coordinate::sao_paulo(), Coordinate::rio_de_janeiro())
            .with_padding(EdgePadding::uniform(20.0))
            .with_animation(false);
        assert!((cmd.padding.top - 20.0).abs() < f64::EPSILON);
        assert!(!cmd.animated);
    }

    #[test]
    fn region_around_uses_default_span() {
        let region = MapRegion::around(Coordinate::sao_paulo());
        assert!((region.latitude_delta - 0.01).abs() < f64::EPSILON);
        assert!((region.longitude_delta - 0.01).abs() < f64::EPSILON);
    }
}
