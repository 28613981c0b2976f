//! Drag tracking between consecutive pointer samples.

use kurbo::{Point, Vec2};

/// One drag segment: where it started and how far the pointer moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSegment {
    /// Previous sample, widget-local.
    pub from: Point,
    /// Displacement from the previous sample to the current one.
    pub delta: Vec2,
}

/// Tracks the previous sample within one continuous drag.
///
/// Empty before the first move and after release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    previous: Option<Point>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a widget-local sample.
    ///
    /// Returns the segment from the previous sample, or `None` for the
    /// first sample of a drag.
    pub fn advance(&mut self, local: Point) -> Option<DragSegment> {
        let segment = self.previous.map(|from| DragSegment {
            from,
            delta: local - from,
        });
        self.previous = Some(local);
        segment
    }

    /// Forget the previous sample.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn is_active(&self) -> bool {
        self.previous.is_some()
    }

    pub fn previous(&self) -> Option<Point> {
        self.previous
    }
}
