//! Rendering primitives for the heart widget (Cairo-based).
//!
//! This module defines the drawing types shared by the renderer and its backend:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`HEART_OUTLINE`]: the fixed heart curve in local coordinates
//! - [`DrawList`]: renderer-agnostic draw steps produced by the paint pass
//! - [`render_draw_list`]: executes a draw list on a Cairo context

pub mod color;
pub mod commands;
pub mod outline;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use commands::{DrawList, DrawOp, Fill, LayerBounds, RadialGradient};
pub use outline::{HEART_OUTLINE, OUTLINE_HEIGHT, OUTLINE_RATIO, OUTLINE_WIDTH};
pub use render::{create_surface, render_draw_list};
