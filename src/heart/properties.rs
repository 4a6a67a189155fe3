//! Shape properties owned by a renderer.

use crate::draw::{Color, color::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which axis is measured independently; the other follows the outline ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SizeBasis {
    /// Both axes are measured independently
    #[default]
    None,
    /// Height is derived from width
    Width,
    /// Width is derived from height
    Height,
}

/// Padding in pixels around the heart box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Everything a caller can configure on the heart.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeProperties {
    /// Interior color, also the inner stop of the gradient
    pub fill_color: Color,
    /// Outer stop of the gradient
    pub edge_color: Color,
    /// Gradient center, each axis normalized to [-1, 1] of the half extent
    pub center: (f64, f64),
    /// Multiplier applied to the gradient radius; not clamped
    pub radius_percent: f64,
    pub stroke_color: Color,
    /// Stroke width in pixels
    pub stroke_width: f64,
    pub padding: Padding,
    pub size_basis: SizeBasis,
}

impl Default for ShapeProperties {
    fn default() -> Self {
        Self {
            fill_color: RED,
            edge_color: RED,
            center: (0.0, 0.0),
            radius_percent: 1.0,
            stroke_color: TRANSPARENT,
            stroke_width: 0.0,
            padding: Padding::default(),
            size_basis: SizeBasis::None,
        }
    }
}
