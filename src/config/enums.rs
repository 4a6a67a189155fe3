//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named or hex color, or 8-bit channel values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "red"
///
/// # Hex, #RRGGBB or #AARRGGBB
/// edge_color = "#80FF69B4"
///
/// # RGB or RGBA (0-255 per component)
/// stroke_color = [255, 128, 0]
/// stroke_color = [255, 128, 0, 128]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black, transparent) or hex
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
    /// RGBA color as [red, green, blue, alpha] where each component is 0-255
    Rgba([u8; 4]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names fall back to red with a warning, matching the widget's
    /// default fill.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgba8(*r, *g, *b, 255),
            ColorSpec::Rgba([r, g, b, a]) => Color::from_rgba8(*r, *g, *b, *a),
        }
    }
}
