//! Visibility signals for scroll-triggered reveal effects.
//!
//! Rendering code asks a [`VisibilitySignal`] whether a section should be
//! shown; how visibility is detected belongs to the front end.

/// Intersection ratio at which the earnings section is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.01;

/// Reports whether a section has become visible.
pub trait VisibilitySignal {
    fn is_visible(&self) -> bool;
}

/// Latches visible once an observed intersection ratio reaches the
/// threshold. Scrolling away afterwards does not hide the section again.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdVisibility {
    threshold: f64,
    visible: bool,
}

impl ThresholdVisibility {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    /// Records an intersection ratio in `[0, 1]` and returns the new state.
    pub fn observe(
        &mut self,
        intersection_ratio: f64,
    ) -> bool {
        if !self.visible && intersection_ratio > 0.0 && intersection_ratio >= self.threshold {
            self.visible = true;
        }
        self.visible
    }
}

impl Default for ThresholdVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl VisibilitySignal for ThresholdVisibility {
    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!ThresholdVisibility::default().is_visible());
    }

    #[test]
    fn becomes_visible_at_threshold() {
        let mut signal = ThresholdVisibility::new(0.25);

        assert!(!signal.observe(0.1));
        assert!(signal.observe(0.25));
    }

    #[test]
    fn stays_visible_after_scrolling_away() {
        let mut signal = ThresholdVisibility::default();

        signal.observe(0.5);

        assert!(signal.observe(0.0));
        assert!(signal.is_visible());
    }

    #[test]
    fn zero_ratio_never_reveals() {
        let mut signal = ThresholdVisibility::new(0.0);

        assert!(!signal.observe(0.0));
    }
}
