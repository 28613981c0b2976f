//! Dial colors and strokes.

use egui::{Color32, Stroke};

use crate::theme;

/// Visual style of a dial.
#[derive(Clone, Debug, PartialEq)]
pub struct DialStyle {
    /// Fill of the rotating face inside the tick ring.
    pub dial_color: Color32,
    /// Fill of the full-size disc behind the face (None = transparent).
    pub outline_color: Option<Color32>,
    /// Tick line and label color.
    pub tick_color: Color32,
    /// Tick line width.
    pub tick_width: f32,
    /// Pointer mark fill.
    pub pointer_color: Color32,
    /// Stroke of the tick ring.
    pub ring_stroke: Stroke,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            dial_color: theme::DIAL,
            outline_color: Some(theme::OUTLINE),
            tick_color: theme::TICK,
            tick_width: 0.5,
            pointer_color: theme::POINTER,
            ring_stroke: Stroke::new(1.0, theme::RING),
        }
    }
}

impl DialStyle {
    /// Build a style from CSS hex strings, as hosts usually supply them.
    ///
    /// Unparseable colors keep their defaults. An empty outline string
    /// disables the outline disc.
    pub fn from_hex(dial: &str, outline: &str, tick: &str) -> Self {
        let defaults = Self::default();
        let outline_color = if outline.is_empty() {
            None
        } else {
            parse_hex_color(outline).or(defaults.outline_color)
        };
        Self {
            dial_color: parse_hex_color(dial).unwrap_or(defaults.dial_color),
            outline_color,
            tick_color: parse_hex_color(tick).unwrap_or(defaults.tick_color),
            ..defaults
        }
    }
}

/// Parse a `#rgb` or `#rrggbb` color.
pub fn parse_hex_color(color: &str) -> Option<Color32> {
    let hex = color.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
            Some(Color32::from_rgb(channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}
