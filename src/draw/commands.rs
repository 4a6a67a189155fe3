//! Renderer-agnostic draw command list.
//!
//! The renderer produces a [`DrawList`] from its cached geometry; a backend
//! (see [`super::render`]) executes it. Keeping the list a plain value lets
//! paint output be inspected without a drawing surface.

use super::color::Color;
use serde::Serialize;

/// Radial interpolation from `inner` at `center` to `outer` at `radius`.
///
/// Coordinates are in outline-local (unscaled) space. Beyond the radius the
/// outer color is held.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RadialGradient {
    pub center: (f64, f64),
    pub radius: f64,
    pub inner: Color,
    pub outer: Color,
}

/// Paint source for the outline interior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Fill {
    Solid(Color),
    Radial(RadialGradient),
}

/// Axis-aligned rectangle given by its corners, in translated canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayerBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// A single drawing step.
///
/// Steps that take a `scale` apply it uniformly to the outline before drawing;
/// line widths are expressed in the scaled (outline-local) space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum DrawOp {
    /// Fill the outline interior, no stroke.
    FillOutline { scale: f64, fill: Fill },
    /// Open an isolated transparency layer merged at `alpha` when closed.
    BeginLayer { bounds: LayerBounds, alpha: f64 },
    /// Fill the outline and stroke its border in one opaque color.
    StrokeAndFillOutline {
        scale: f64,
        color: Color,
        line_width: f64,
    },
    /// Erase layer content covered by the outline interior.
    EraseOutline { scale: f64 },
    /// Close the innermost layer and composite it.
    EndLayer,
}

/// Ordered draw steps executed in a frame translated by `translate`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DrawList {
    pub translate: (f64, f64),
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(translate: (f64, f64)) -> Self {
        Self {
            translate,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Whether any step opens a transparency layer.
    pub fn opens_layer(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, DrawOp::BeginLayer { .. }))
    }

    /// The interior fill, when the list has one.
    pub fn fill(&self) -> Option<&Fill> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::FillOutline { fill, .. } => Some(fill),
            _ => None,
        })
    }
}
