//! Layout pass: scale, translation, and gradient derived from properties.

use super::measure::Size;
use super::properties::ShapeProperties;
use crate::draw::RadialGradient;
use crate::draw::outline::{OUTLINE_HEIGHT, OUTLINE_WIDTH};
use serde::Serialize;

/// Geometry cached between property changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CachedGeometry {
    /// Padded heart box
    pub content: Size,
    /// Canvas point the outline origin maps to
    pub translation: (f64, f64),
    /// Uniform outline scale; nothing is drawn when this is not positive
    pub scale: f64,
    /// `None` means a flat fill
    pub gradient: Option<RadialGradient>,
}

impl CachedGeometry {
    pub fn is_drawable(&self) -> bool {
        self.scale > 0.0
    }
}

/// Picks the candidate with the smaller magnitude.
///
/// Comparing magnitudes keeps negative sizes from panicking; they simply
/// produce a non-positive scale.
pub fn uniform_scale(sx: f64, sy: f64) -> f64 {
    if sx.abs() < sy.abs() { sx } else { sy }
}

/// Computes cached geometry for a measured `size`.
pub fn compute_geometry(props: &ShapeProperties, size: Size) -> CachedGeometry {
    let padding = &props.padding;
    let stroke = props.stroke_width;
    let content = Size {
        width: size.width - padding.horizontal(),
        height: size.height - padding.vertical(),
    };
    let translation = (
        content.width / 2.0 + padding.left,
        content.height / 2.0 + padding.top,
    );
    let sx = (content.width - stroke * 2.0) / OUTLINE_WIDTH;
    let sy = (content.height - stroke * 2.0) / OUTLINE_HEIGHT;
    let scale = uniform_scale(sx, sy);

    let gradient = if scale > 0.0 && props.fill_color != props.edge_color {
        radial_gradient(props, content, scale)
    } else {
        None
    };

    CachedGeometry {
        content,
        translation,
        scale,
        gradient,
    }
}

/// Gradient in outline-local space, or `None` when the radius collapses.
fn radial_gradient(props: &ShapeProperties, content: Size, scale: f64) -> Option<RadialGradient> {
    let stroke = props.stroke_width;
    let half_x = content.width / 2.0 - stroke;
    let half_y = content.height / 2.0 - stroke;
    let center_x = half_x * props.center.0;
    let center_y = half_y * props.center.1;
    let reach_x = center_x.abs() + half_x;
    let reach_y = center_y.abs() + half_y;
    let radius = (reach_x * reach_x + reach_y * reach_y).sqrt() * props.radius_percent / scale;

    if radius.is_nan() || radius <= 0.0 {
        return None;
    }
    Some(RadialGradient {
        center: (center_x / scale, center_y / scale),
        radius,
        inner: props.fill_color,
        outer: props.edge_color,
    })
}
