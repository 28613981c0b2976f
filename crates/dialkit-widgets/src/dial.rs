//! The interactive dial widget.

use dialkit_core::{DialControl, DialGeometry, PointerMark};
use egui::{Align2, FontId, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, vec2};
use kurbo::Point;

use crate::face::{FaceLayout, rotate_about};
use crate::style::DialStyle;

/// What happened to the dial this frame.
pub struct DialResponse {
    /// The egui response for the dial's rect. Marked changed when the
    /// rotation changed.
    pub response: Response,
    /// Rotation reported by a drag sample this frame.
    pub changed: Option<f64>,
    /// Final rotation if a drag ended this frame.
    pub released: Option<f64>,
}

/// A rotary dial driven by a [`DialControl`].
///
/// The control keeps the rotation between frames; this widget only
/// forwards layout and drag input to it and paints the result.
pub struct DialWidget<'a> {
    control: &'a mut DialControl,
    style: DialStyle,
}

impl<'a> DialWidget<'a> {
    /// Create a dial widget for a control.
    pub fn new(control: &'a mut DialControl) -> Self {
        Self {
            control,
            style: DialStyle::default(),
        }
    }

    /// Set the dial style.
    pub fn style(mut self, style: DialStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the dial and report rotation changes.
    pub fn show(self, ui: &mut Ui) -> DialResponse {
        let size = self.control.config().dial_size as f32;
        let (rect, mut response) = ui.allocate_exact_size(vec2(size, size), Sense::drag());

        self.control.set_geometry(DialGeometry::new(
            f64::from(rect.min.x),
            f64::from(rect.min.y),
            f64::from(rect.width()),
            f64::from(rect.height()),
        ));

        let mut changed = None;
        if response.dragged() && (response.drag_started() || response.drag_delta() != Vec2::ZERO) {
            if let Some(pos) = response.interact_pointer_pos() {
                changed = self
                    .control
                    .pointer_move(Point::new(f64::from(pos.x), f64::from(pos.y)));
            }
        }

        let released = response
            .drag_stopped()
            .then(|| self.control.pointer_release());

        if changed.is_some() || released.is_some() {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect);
        }

        DialResponse {
            response,
            changed,
            released,
        }
    }

    fn paint(&self, ui: &Ui, rect: Rect) {
        let config = self.control.config();
        let face = FaceLayout::new(rect, config);
        let rotation = self.control.rotation() as f32;
        let painter = ui.painter();

        // Rotating layer
        if let Some(outline) = self.style.outline_color {
            painter.circle_filled(face.center, face.outer_radius, outline);
        }
        painter.circle_filled(face.center, face.tick_radius, self.style.dial_color);
        match config.pointer_mark {
            PointerMark::Triangle => {
                let points = face
                    .pointer_triangle()
                    .iter()
                    .map(|&p| rotate_about(p, face.center, rotation))
                    .collect();
                painter.add(Shape::convex_polygon(
                    points,
                    self.style.pointer_color,
                    Stroke::NONE,
                ));
            }
            PointerMark::Circle => {
                let center = rotate_about(face.pointer_circle(), face.center, rotation);
                painter.circle_filled(
                    center,
                    crate::sizing::POINTER_CIRCLE_RADIUS,
                    self.style.pointer_color,
                );
            }
            PointerMark::None => {}
        }

        // Fixed layer
        painter.circle_stroke(face.center, face.tick_radius, self.style.ring_stroke);
        let tick_stroke = Stroke::new(self.style.tick_width, self.style.tick_color);
        let font = FontId::proportional(face.label_font_size);
        for mark in self.control.integrator().tick_marks() {
            let angle = mark.angle as f32;
            painter.line_segment(face.tick_line(angle), tick_stroke);
            if config.show_tick_labels && !mark.label.is_empty() {
                painter.text(
                    face.label_position(angle),
                    Align2::CENTER_CENTER,
                    mark.label,
                    font.clone(),
                    self.style.tick_color,
                );
            }
        }
    }
}
