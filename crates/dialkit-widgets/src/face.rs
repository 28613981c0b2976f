//! Layout math for painting a dial face.
//!
//! Angles are in degrees, 0° at the top of the dial, increasing clockwise
//! on screen.

use dialkit_core::{DialConfig, TickPosition};
use egui::{Pos2, Rect, pos2};

use crate::sizing;

/// Point at `radius` from `center` in the direction of `degrees`.
pub fn polar(center: Pos2, radius: f32, degrees: f32) -> Pos2 {
    let radians = (degrees - 90.0).to_radians();
    pos2(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Rotate `point` clockwise about `center` by `degrees`.
pub fn rotate_about(point: Pos2, center: Pos2, degrees: f32) -> Pos2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - center;
    pos2(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Positions of every dial element for one widget rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLayout {
    pub center: Pos2,
    /// Radius of the widget disc.
    pub outer_radius: f32,
    /// Radius of the tick ring.
    pub tick_radius: f32,
    pub tick_line_length: f32,
    pub tick_position: TickPosition,
    pub label_font_size: f32,
}

impl FaceLayout {
    pub fn new(rect: Rect, config: &DialConfig) -> Self {
        let size = rect.width().min(rect.height());
        Self {
            center: rect.center(),
            outer_radius: size / 2.0,
            tick_radius: ((size - sizing::RING_MARGIN) / 2.0).max(0.0),
            tick_line_length: config.tick_line_length as f32,
            tick_position: config.tick_position,
            label_font_size: config.tick_label_font_size as f32,
        }
    }

    /// Endpoints of the tick line at `degrees`, ring end first.
    pub fn tick_line(&self, degrees: f32) -> [Pos2; 2] {
        let inward = match self.tick_position {
            TickPosition::Inside => self.tick_line_length,
            TickPosition::Outside => -self.tick_line_length,
        };
        [
            polar(self.center, self.tick_radius, degrees),
            polar(self.center, self.tick_radius - inward, degrees),
        ]
    }

    /// Centre of the label for the tick at `degrees`.
    pub fn label_position(&self, degrees: f32) -> Pos2 {
        let offset = match self.tick_position {
            TickPosition::Inside => -self.label_font_size,
            TickPosition::Outside => self.label_font_size + sizing::OUTSIDE_LABEL_GAP,
        };
        let radius = self.tick_radius - self.tick_line_length + offset;
        polar(self.center, radius, degrees)
    }

    /// Triangle pointing at the ring, before rotation.
    pub fn pointer_triangle(&self) -> [Pos2; 3] {
        let tip_y = self.center.y - self.tick_radius;
        [
            pos2(self.center.x, tip_y),
            pos2(
                self.center.x + sizing::POINTER_TRIANGLE_HALF_WIDTH,
                tip_y + sizing::POINTER_TRIANGLE_HEIGHT,
            ),
            pos2(
                self.center.x - sizing::POINTER_TRIANGLE_HALF_WIDTH,
                tip_y + sizing::POINTER_TRIANGLE_HEIGHT,
            ),
        ]
    }

    /// Centre of the circular pointer mark, before rotation.
    pub fn pointer_circle(&self) -> Pos2 {
        pos2(
            self.center.x,
            self.center.y - self.tick_radius + sizing::POINTER_CIRCLE_INSET,
        )
    }
}
