//! Widget geometry and drag-start classification.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// The dial's on-screen bounding box, as last measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DialGeometry {
    /// Top-left corner in screen coordinates.
    pub origin: Point,
    /// Measured width and height.
    pub size: Size,
}

impl DialGeometry {
    /// Create geometry from a host layout report.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create geometry from a screen-space rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            origin: rect.origin(),
            size: rect.size(),
        }
    }

    /// Screen-space rectangle covered by the widget.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Convert an absolute pointer position to widget-local coordinates.
    pub fn to_local(&self, screen_point: Point) -> Point {
        Point::new(screen_point.x - self.origin.x, screen_point.y - self.origin.y)
    }

    /// Classify a widget-local point into the quadrant it lies in.
    ///
    /// Points exactly on the horizontal midline count as lower, points on
    /// the vertical midline count as right.
    pub fn classify(&self, local: Point) -> StartQuadrant {
        let upper = local.y < self.size.height / 2.0;
        let left = local.x < self.size.width / 2.0;
        StartQuadrant::from_flags(upper, left)
    }
}

/// Quadrant of the widget in which a drag segment started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartQuadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl StartQuadrant {
    /// Build a quadrant from the upper/left flags.
    pub fn from_flags(upper: bool, left: bool) -> Self {
        match (upper, left) {
            (true, true) => Self::UpperLeft,
            (true, false) => Self::UpperRight,
            (false, true) => Self::LowerLeft,
            (false, false) => Self::LowerRight,
        }
    }

    pub fn is_upper(self) -> bool {
        matches!(self, Self::UpperLeft | Self::UpperRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Self::UpperLeft | Self::LowerLeft)
    }
}
