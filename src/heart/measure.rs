//! Size resolution for the heart widget.

use super::properties::{Padding, SizeBasis};
use crate::draw::outline::{OUTLINE_HEIGHT, OUTLINE_RATIO, OUTLINE_WIDTH};
use crate::units::{DisplayMetrics, Unit};
use serde::Serialize;

/// Smallest heart width the widget asks for, in dp.
pub const MIN_HEART_SIZE_DP: f64 = 24.0;

/// Size hint supplied by the host layout for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// No constraint; the intrinsic minimum is used
    Unspecified,
    /// Upper bound; the intrinsic minimum is used
    AtMost(f64),
    /// The axis must be exactly this size
    Exactly(f64),
}

impl MeasureSpec {
    /// Resolves this hint against the intrinsic minimum.
    pub fn resolve(self, suggested: f64) -> f64 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => suggested,
        }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Intrinsic minimum size: 24dp wide, the matching outline height, plus padding.
pub fn intrinsic_min_size(metrics: &DisplayMetrics, padding: &Padding) -> Size {
    let base = metrics.apply_dimension(MIN_HEART_SIZE_DP, Unit::Dip);
    Size {
        width: base.round() + padding.horizontal(),
        height: (base * OUTLINE_HEIGHT / OUTLINE_WIDTH).round() + padding.vertical(),
    }
}

/// Resolves the widget size for the given hints and size basis.
///
/// When one axis is derived from the other the outline aspect ratio is kept.
pub fn resolve_size(
    width: MeasureSpec,
    height: MeasureSpec,
    basis: SizeBasis,
    min_width: f64,
    min_height: f64,
) -> Size {
    match basis {
        SizeBasis::None => Size {
            width: width.resolve(min_width),
            height: height.resolve(min_height),
        },
        SizeBasis::Width => {
            let width = width.resolve(min_width);
            Size {
                width,
                height: width / OUTLINE_RATIO,
            }
        }
        SizeBasis::Height => {
            let height = height.resolve(min_height);
            Size {
                width: height * OUTLINE_RATIO,
                height,
            }
        }
    }
}
