//! Invalidation tracking between property changes, layout, and paint.

/// Pending work accumulated since the last layout and present.
#[derive(Debug, Default)]
pub struct Invalidation {
    measure: bool,
    layout: bool,
    redraw: bool,
}

impl Invalidation {
    /// Creates a tracker with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// The host must measure again before the next layout.
    pub fn mark_measure(&mut self) {
        self.measure = true;
        self.mark_layout();
    }

    /// Cached geometry is stale. Implies a redraw.
    pub fn mark_layout(&mut self) {
        self.layout = true;
        self.redraw = true;
    }

    /// Only the painted output is stale.
    pub fn mark_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn needs_measure(&self) -> bool {
        self.measure
    }

    pub fn needs_layout(&self) -> bool {
        self.layout
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    pub fn clear_measure(&mut self) {
        self.measure = false;
    }

    pub fn clear_layout(&mut self) {
        self.layout = false;
    }

    /// Returns whether a redraw was pending and clears it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}
