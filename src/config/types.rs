//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::heart::SizeBasis;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Heart appearance attributes.
///
/// Lengths are in density-independent pixels and resolved with the output
/// density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HeartStyle {
    /// Which axis drives the size: "none", "width" or "height"
    #[serde(default)]
    pub size_basis: SizeBasis,

    /// Fill color, also the gradient's inner color
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Gradient outer color; equal to `color` means a flat fill
    #[serde(default = "default_color")]
    pub edge_color: ColorSpec,

    /// Gradient center X, -1.0 (left edge) to 1.0 (right edge)
    #[serde(default)]
    pub center_x: f64,

    /// Gradient center Y, -1.0 (top edge) to 1.0 (bottom edge)
    #[serde(default)]
    pub center_y: f64,

    /// Gradient radius multiplier, 1.0 reaches the far corner
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Outline color; its alpha applies to the whole ring
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Outline width in dp (0 disables the outline)
    #[serde(default)]
    pub stroke_width: f64,

    /// Padding on every side in dp
    #[serde(default)]
    pub padding: f64,
}

impl Default for HeartStyle {
    fn default() -> Self {
        Self {
            size_basis: SizeBasis::default(),
            color: default_color(),
            edge_color: default_color(),
            center_x: 0.0,
            center_y: 0.0,
            radius: default_radius(),
            stroke_color: default_stroke_color(),
            stroke_width: 0.0,
            padding: 0.0,
        }
    }
}

/// Demo output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Exact width in pixels
    #[serde(default = "default_output_width")]
    pub width: Option<f64>,

    /// Exact height in pixels
    #[serde(default = "default_output_height")]
    pub height: Option<f64>,

    /// Pixels per dp (valid range: 0.1 - 8.0)
    #[serde(default = "default_density")]
    pub density: f64,

    /// Where the PNG is written
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: default_output_width(),
            height: default_output_height(),
            density: default_density(),
            path: default_output_path(),
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("transparent".to_string())
}

fn default_radius() -> f64 {
    1.0
}

fn default_output_width() -> Option<f64> {
    Some(322.0)
}

fn default_output_height() -> Option<f64> {
    Some(284.0)
}

fn default_density() -> f64 {
    1.0
}

fn default_output_path() -> PathBuf {
    PathBuf::from("heart.png")
}
