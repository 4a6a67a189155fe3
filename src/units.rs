//! Length units and conversion to physical pixels.

/// Unit a caller-supplied length is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Physical pixels
    Px,
    /// Density-independent pixels (1dp = 1px at density 1.0)
    Dip,
    /// Scale-independent pixels, follows the user font scale
    Sp,
    /// Points, 1/72 inch
    Pt,
    /// Inches
    In,
    /// Millimeters
    Mm,
}

/// Display characteristics used to resolve lengths to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel
    pub density: f64,
    /// Pixels per scale-independent pixel
    pub scaled_density: f64,
    /// Physical pixels per inch along X
    pub xdpi: f64,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl DisplayMetrics {
    /// Metrics for a display at `density`, with no extra font scaling.
    pub fn with_density(density: f64) -> Self {
        Self {
            density,
            scaled_density: density,
            xdpi: 160.0 * density,
        }
    }

    /// Converts `value` in `unit` to pixels.
    pub fn apply_dimension(&self, value: f64, unit: Unit) -> f64 {
        match unit {
            Unit::Px => value,
            Unit::Dip => value * self.density,
            Unit::Sp => value * self.scaled_density,
            Unit::Pt => value * self.xdpi / 72.0,
            Unit::In => value * self.xdpi,
            Unit::Mm => value * self.xdpi / 25.4,
        }
    }
}
