//! egui rotary dial widget backed by `dialkit-core`.
//!
//! - **Dial**: the interactive widget, forwarding drags to a [`DialControl`]
//! - **Face**: layout math for the ring, ticks, labels and pointer mark
//! - **Style**: colors and strokes, with CSS hex parsing for host themes
//!
//! [`DialControl`]: dialkit_core::DialControl

pub mod dial;
pub mod face;
pub mod style;

pub use dial::{DialResponse, DialWidget};
pub use face::FaceLayout;
pub use style::{DialStyle, parse_hex_color};

/// Standard sizing constants used by the dial.
pub mod sizing {
    /// Space between the widget edge and the tick ring, summed over both sides.
    pub const RING_MARGIN: f32 = 40.0;
    /// Radius of the circular pointer mark.
    pub const POINTER_CIRCLE_RADIUS: f32 = 6.0;
    /// Distance from the ring to the centre of the circular pointer mark.
    pub const POINTER_CIRCLE_INSET: f32 = 15.0;
    /// Half the base width of the triangular pointer mark.
    pub const POINTER_TRIANGLE_HALF_WIDTH: f32 = 5.0;
    /// Height of the triangular pointer mark.
    pub const POINTER_TRIANGLE_HEIGHT: f32 = 10.0;
    /// Extra gap between an outside tick and its label.
    pub const OUTSIDE_LABEL_GAP: f32 = 16.0;
}

/// Standard colors used by the dial.
pub mod theme {
    use egui::Color32;

    /// Rotating face fill
    pub const DIAL: Color32 = Color32::from_rgb(0xaa, 0xaa, 0xaa);
    /// Disc behind the face
    pub const OUTLINE: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
    /// Tick lines and labels
    pub const TICK: Color32 = Color32::BLACK;
    /// Pointer mark
    pub const POINTER: Color32 = Color32::BLACK;
    /// Tick ring
    pub const RING: Color32 = Color32::BLACK;
}
