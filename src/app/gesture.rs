//! Pull gesture tracking
//!
//! The terminal has no touch input, so a pull is a left-button drag: press
//! anchors it, dragging down grows it, release decides.

#[derive(Debug, Clone)]
pub struct PullGesture {
    threshold: u16,
    anchor: Option<u16>,
    distance: u16,
}

impl PullGesture {
    pub fn new(threshold: u16) -> Self {
        PullGesture {
            threshold: threshold.max(1),
            anchor: None,
            distance: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn press(&mut self, row: u16) {
        self.anchor = Some(row);
        self.distance = 0;
    }

    /// Dragging above the anchor counts as zero
    pub fn drag(&mut self, row: u16) {
        if let Some(anchor) = self.anchor {
            self.distance = row.saturating_sub(anchor);
        }
    }

    /// End the gesture. Returns true if it passed the threshold.
    pub fn release(&mut self, row: u16) -> bool {
        if self.anchor.is_none() {
            return false;
        }
        self.drag(row);
        let triggered = self.is_armed();
        tracing::debug!(distance = self.distance, threshold = self.threshold, triggered, "Pull released");
        self.cancel();
        triggered
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
        self.distance = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.anchor.is_some() && self.distance >= self.threshold
    }

    /// Fraction of the threshold covered, capped at 1.0
    pub fn progress(&self) -> Option<f32> {
        self.anchor
            .map(|_| (f32::from(self.distance) / f32::from(self.threshold)).min(1.0))
    }
}
