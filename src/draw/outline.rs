//! The fixed heart outline in local, unscaled coordinates.

/// Nominal outline width in local units.
pub const OUTLINE_WIDTH: f64 = 322.0;

/// Nominal outline height in local units.
pub const OUTLINE_HEIGHT: f64 = 284.0;

/// Width to height ratio of the outline.
pub const OUTLINE_RATIO: f64 = OUTLINE_WIDTH / OUTLINE_HEIGHT;

/// One cubic Bézier segment: two control points and the end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic {
    pub c1: (f64, f64),
    pub c2: (f64, f64),
    pub to: (f64, f64),
}

/// Closed curve made of cubic segments starting at `start`.
#[derive(Debug, PartialEq)]
pub struct Outline {
    pub start: (f64, f64),
    pub segments: [Cubic; 4],
}

/// Heart shape centered at the origin, symmetric about the Y axis.
pub const HEART_OUTLINE: Outline = Outline {
    start: (0.0, -115.0),
    segments: [
        Cubic {
            c1: (-50.0, -165.0),
            c2: (-161.0, -141.0),
            to: (-161.0, -44.0),
        },
        Cubic {
            c1: (-161.0, 59.0),
            c2: (-20.0, 141.0),
            to: (0.0, 141.0),
        },
        Cubic {
            c1: (20.0, 141.0),
            c2: (161.0, 59.0),
            to: (161.0, -44.0),
        },
        Cubic {
            c1: (161.0, -141.0),
            c2: (50.0, -165.0),
            to: (0.0, -115.0),
        },
    ],
};

impl Outline {
    /// Appends the outline as a closed sub-path to the current Cairo path.
    ///
    /// Coordinates are in the context's current user space, so callers apply
    /// the scale before calling this.
    pub fn append_to(&self, ctx: &cairo::Context) {
        ctx.new_sub_path();
        ctx.move_to(self.start.0, self.start.1);
        for seg in &self.segments {
            ctx.curve_to(seg.c1.0, seg.c1.1, seg.c2.0, seg.c2.1, seg.to.0, seg.to.1);
        }
        ctx.close_path();
    }
}
