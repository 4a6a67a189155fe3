//! Utility functions for color parsing and touch mapping.
//!
//! This module provides:
//! - Color name and hex string parsing for config and CLI input
//! - Touch-point to normalized gradient-center mapping

use crate::draw::{Color, color::*};

// ============================================================================
// Touch Mapping
// ============================================================================

/// Maps a touch point to a normalized gradient center.
///
/// The widget center maps to `(0, 0)` and its edges to `±1`. Points outside
/// the bounds map beyond that range. A zero-sized axis maps to `0`.
///
/// # Arguments
/// * `touch_x` - Touch X coordinate in widget pixels
/// * `touch_y` - Touch Y coordinate in widget pixels
/// * `width` - Widget width in pixels
/// * `height` - Widget height in pixels
pub fn touch_to_center(touch_x: f64, touch_y: f64, width: f64, height: f64) -> (f64, f64) {
    (
        normalize_axis(touch_x, width),
        normalize_axis(touch_y, height),
    )
}

fn normalize_axis(value: f64, extent: f64) -> f64 {
    let half = extent / 2.0;
    if half == 0.0 {
        return 0.0;
    }
    (value - half) / half
}

// ============================================================================
// Color Parsing
// ============================================================================

/// Parses a color name or hex string.
///
/// Accepts the names understood by [`name_to_color`], `#RRGGBB`, and
/// `#AARRGGBB`.
pub fn parse_color(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    match trimmed.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => name_to_color(trimmed),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::from_argb(0xFF00_0000 | value)),
        8 => Some(Color::from_argb(value)),
        _ => None,
    }
}

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}
