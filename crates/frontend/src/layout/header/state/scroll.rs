/// Tracks whether the page has scrolled past the compaction threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    is_scrolled: bool,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            is_scrolled: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    /// Feed the current vertical offset. Returns `true` when the flag flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.is_scrolled;
        self.is_scrolled = scrolled;
        changed
    }
}
