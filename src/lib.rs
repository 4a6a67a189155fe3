//! Heart-shaped widget renderer.
//!
//! [`HeartRenderer`] owns the shape properties, recomputes cached geometry on
//! change, and paints into a renderer-agnostic [`draw::DrawList`] that the
//! Cairo backend executes. Configuration and utility modules are shared with
//! the demo binary.

pub mod config;
pub mod draw;
pub mod error;
pub mod heart;
pub mod units;
pub mod util;

pub use config::Config;
pub use error::RenderError;
pub use heart::HeartRenderer;
