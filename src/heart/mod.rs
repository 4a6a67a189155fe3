//! Heart widget core: property state, layout pass, and paint pass.
//!
//! [`HeartRenderer`] keeps three concerns apart:
//! - setters update [`ShapeProperties`] and flip invalidation flags
//! - [`HeartRenderer::refresh`] recomputes [`CachedGeometry`] when stale
//! - [`HeartRenderer::paint`] turns the cached geometry into a [`DrawList`]
//!
//! The host drives measurement through [`HeartRenderer::measure`]; nothing is
//! laid out before the first measurement.

pub mod geometry;
pub mod invalidation;
pub mod measure;
pub mod properties;

#[cfg(test)]
mod tests;

pub use geometry::{CachedGeometry, compute_geometry};
pub use invalidation::Invalidation;
pub use measure::{MeasureSpec, Size, intrinsic_min_size, resolve_size};
pub use properties::{Padding, ShapeProperties, SizeBasis};

use crate::config::HeartStyle;
use crate::draw::{
    Color, DrawList, DrawOp, Fill, LayerBounds, create_surface, render_draw_list,
};
use crate::error::RenderError;
use crate::units::{DisplayMetrics, Unit};
use crate::util;
use std::io::Write;

/// Stateful heart widget.
#[derive(Debug)]
pub struct HeartRenderer {
    props: ShapeProperties,
    metrics: DisplayMetrics,
    /// Last measured size; `None` until the host measures
    size: Option<Size>,
    geometry: Option<CachedGeometry>,
    invalidation: Invalidation,
    layout_generation: u64,
}

impl Default for HeartRenderer {
    fn default() -> Self {
        Self::new(DisplayMetrics::default())
    }
}

impl HeartRenderer {
    /// Creates a renderer with default properties.
    pub fn new(metrics: DisplayMetrics) -> Self {
        let mut invalidation = Invalidation::new();
        invalidation.mark_measure();
        Self {
            props: ShapeProperties::default(),
            metrics,
            size: None,
            geometry: None,
            invalidation,
            layout_generation: 0,
        }
    }

    /// Creates a renderer and applies a declarative style.
    pub fn from_style(style: &HeartStyle, metrics: DisplayMetrics) -> Self {
        let mut renderer = Self::new(metrics);
        renderer.apply_style(style);
        renderer
    }

    /// Applies every attribute of `style` through the regular setters.
    pub fn apply_style(&mut self, style: &HeartStyle) {
        self.set_size_basis(style.size_basis);
        self.set_fill_color(style.color.to_color());
        self.set_edge_color(style.edge_color.to_color());
        self.set_gradient_center(style.center_x, style.center_y);
        self.set_radius_percent(style.radius);
        self.set_stroke_color(style.stroke_color.to_color());
        self.set_stroke_width(style.stroke_width, Unit::Dip);
        self.set_uniform_padding(style.padding, Unit::Dip);
    }

    pub fn properties(&self) -> &ShapeProperties {
        &self.props
    }

    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    pub fn measured_size(&self) -> Option<Size> {
        self.size
    }

    /// Cached geometry as of the last layout pass.
    pub fn geometry(&self) -> Option<&CachedGeometry> {
        self.geometry.as_ref()
    }

    pub fn needs_measure(&self) -> bool {
        self.invalidation.needs_measure()
    }

    pub fn needs_layout(&self) -> bool {
        self.invalidation.needs_layout()
    }

    pub fn needs_redraw(&self) -> bool {
        self.invalidation.needs_redraw()
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        self.invalidation.take_redraw()
    }

    /// Number of geometry recomputes so far.
    pub fn layout_generation(&self) -> u64 {
        self.layout_generation
    }

    pub fn set_fill_color(&mut self, color: Color) -> bool {
        let changed = replace_if_changed(&mut self.props.fill_color, color);
        self.invalidate(changed, "fill_color", Scope::Layout)
    }

    pub fn set_edge_color(&mut self, color: Color) -> bool {
        let changed = replace_if_changed(&mut self.props.edge_color, color);
        self.invalidate(changed, "edge_color", Scope::Layout)
    }

    /// Stroke color is read at paint time only, so geometry stays valid.
    pub fn set_stroke_color(&mut self, color: Color) -> bool {
        let changed = replace_if_changed(&mut self.props.stroke_color, color);
        self.invalidate(changed, "stroke_color", Scope::Redraw)
    }

    pub fn set_stroke_width(&mut self, width: f64, unit: Unit) -> bool {
        let px = self.metrics.apply_dimension(width, unit);
        let changed = replace_if_changed(&mut self.props.stroke_width, px);
        self.invalidate(changed, "stroke_width", Scope::Layout)
    }

    pub fn set_gradient_center(&mut self, x: f64, y: f64) -> bool {
        let changed = replace_if_changed(&mut self.props.center, (x, y));
        self.invalidate(changed, "center", Scope::Layout)
    }

    pub fn set_gradient_center_x(&mut self, x: f64) -> bool {
        self.set_gradient_center(x, self.props.center.1)
    }

    pub fn set_gradient_center_y(&mut self, y: f64) -> bool {
        self.set_gradient_center(self.props.center.0, y)
    }

    pub fn set_radius_percent(&mut self, radius_percent: f64) -> bool {
        let changed = replace_if_changed(&mut self.props.radius_percent, radius_percent);
        self.invalidate(changed, "radius_percent", Scope::Layout)
    }

    /// Sets padding per side; each length is rounded to whole pixels.
    pub fn set_padding(&mut self, left: f64, top: f64, right: f64, bottom: f64, unit: Unit) -> bool {
        let to_px = |value: f64| self.metrics.apply_dimension(value, unit).round();
        let padding = Padding {
            left: to_px(left),
            top: to_px(top),
            right: to_px(right),
            bottom: to_px(bottom),
        };
        let changed = replace_if_changed(&mut self.props.padding, padding);
        // Padding feeds the intrinsic minimum size as well as the layout.
        self.invalidate(changed, "padding", Scope::Measure)
    }

    pub fn set_uniform_padding(&mut self, padding: f64, unit: Unit) -> bool {
        self.set_padding(padding, padding, padding, padding, unit)
    }

    pub fn set_size_basis(&mut self, basis: SizeBasis) -> bool {
        let changed = replace_if_changed(&mut self.props.size_basis, basis);
        self.invalidate(changed, "size_basis", Scope::Measure)
    }

    /// Moves the gradient center to a touch point in widget pixels.
    ///
    /// Ignored until the widget has been measured.
    pub fn touch(&mut self, x: f64, y: f64) -> bool {
        let Some(size) = self.size else {
            log::debug!("touch at ({x:.1}, {y:.1}) before measure, ignoring");
            return false;
        };
        let (cx, cy) = util::touch_to_center(x, y, size.width, size.height);
        self.set_gradient_center(cx, cy)
    }

    fn invalidate(&mut self, changed: bool, property: &str, scope: Scope) -> bool {
        if !changed {
            log::trace!("{property} unchanged, skipping invalidation");
            return false;
        }
        match scope {
            Scope::Measure => self.invalidation.mark_measure(),
            Scope::Layout => self.invalidation.mark_layout(),
            Scope::Redraw => self.invalidation.mark_redraw(),
        }
        true
    }

    /// Resolves the widget size for the host's hints and records it.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let min = intrinsic_min_size(&self.metrics, &self.props.padding);
        let size = resolve_size(width, height, self.props.size_basis, min.width, min.height);
        if self.size != Some(size) {
            log::debug!("measured {:.1}x{:.1}", size.width, size.height);
            self.size = Some(size);
            self.invalidation.mark_layout();
        }
        self.invalidation.clear_measure();
        size
    }

    /// Recomputes cached geometry if it is stale.
    ///
    /// Returns `true` when a recompute happened. Does nothing before the
    /// first measurement.
    pub fn refresh(&mut self) -> bool {
        let Some(size) = self.size else {
            return false;
        };
        if !self.invalidation.needs_layout() {
            return false;
        }

        let geometry = compute_geometry(&self.props, size);
        log::debug!(
            "heart layout #{}: scale={:.4} translate=({:.1}, {:.1}) gradient={}",
            self.layout_generation + 1,
            geometry.scale,
            geometry.translation.0,
            geometry.translation.1,
            if geometry.gradient.is_some() { "radial" } else { "none" }
        );
        self.geometry = Some(geometry);
        self.layout_generation += 1;
        self.invalidation.clear_layout();
        true
    }

    /// Produces the draw list for the current state and consumes the pending
    /// redraw request.
    pub fn paint(&mut self) -> DrawList {
        self.refresh();
        self.invalidation.take_redraw();
        match &self.geometry {
            Some(geometry) => build_draw_list(geometry, &self.props),
            None => DrawList::default(),
        }
    }

    /// Paints and executes the result on a Cairo context.
    pub fn render(&mut self, ctx: &cairo::Context) -> Result<(), RenderError> {
        let list = self.paint();
        render_draw_list(ctx, &list)
    }

    /// Renders onto a transparent surface of the measured size and encodes it as PNG.
    pub fn render_png<W: Write>(&mut self, out: &mut W) -> Result<(), RenderError> {
        let size = self.size.ok_or(RenderError::NotMeasured)?;
        let surface = create_surface(size.width, size.height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            self.render(&ctx)?;
        }
        surface.write_to_png(out)?;
        Ok(())
    }
}

/// What a property change invalidates.
#[derive(Debug, Clone, Copy)]
enum Scope {
    Measure,
    Layout,
    Redraw,
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Builds the paint pass from cached geometry.
///
/// The fill comes first. A nonzero stroke follows as an isolated layer: the
/// outline is filled and stroked opaque, the interior is erased, and the
/// remaining ring is merged at the stroke color's alpha so overlapping stroke
/// coverage never blends twice.
pub fn build_draw_list(geometry: &CachedGeometry, props: &ShapeProperties) -> DrawList {
    let mut list = DrawList::new(geometry.translation);
    if !geometry.is_drawable() {
        return list;
    }
    let scale = geometry.scale;

    let fill = match geometry.gradient {
        Some(gradient) => Fill::Radial(gradient),
        None => Fill::Solid(props.fill_color),
    };
    list.push(DrawOp::FillOutline { scale, fill });

    // Doubled because the inner half of the stroke is erased with the interior.
    let line_width = props.stroke_width / scale * 2.0;
    if line_width != 0.0 {
        let (tx, ty) = geometry.translation;
        list.push(DrawOp::BeginLayer {
            bounds: LayerBounds {
                left: -tx,
                top: -ty,
                right: tx,
                bottom: ty,
            },
            alpha: props.stroke_color.a,
        });
        list.push(DrawOp::StrokeAndFillOutline {
            scale,
            color: props.stroke_color.opaque(),
            line_width,
        });
        list.push(DrawOp::EraseOutline { scale });
        list.push(DrawOp::EndLayer);
    }
    list
}
