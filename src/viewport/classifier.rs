//! Narrow-layout classification
//!
//! The classifier answers `false` until it has seen a real width, so a
//! default guess is never reported as a measurement.

/// Widths strictly below this count as a narrow layout
pub const NARROW_BREAKPOINT: u32 = 768;

/// Something that can report the current viewport width
pub trait ViewportHost {
    /// Current width, or `None` when the host cannot measure it yet
    fn width(&self) -> Option<u32>;
}

/// Tracks whether the viewport is narrower than [`NARROW_BREAKPOINT`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportClassifier {
    width: Option<u32>,
}

impl ViewportClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query `host` and reclassify
    ///
    /// Used both for the first measurement and on every resize
    /// notification. When the host has no width the previous observation
    /// (if any) is kept. Returns whether a width was observed.
    pub fn observe<H: ViewportHost + ?Sized>(&mut self, host: &H) -> bool {
        match host.width() {
            Some(width) => {
                self.record(width);
                true
            }
            None => false,
        }
    }

    /// Reclassify from a width delivered with a resize notification
    pub fn record(&mut self, width: u32) {
        let was_narrow = self.is_narrow();
        self.width = Some(width);
        if was_narrow != self.is_narrow() {
            tracing::debug!(width, narrow = self.is_narrow(), "layout classification changed");
        }
    }

    /// Whether the last observed width is below the breakpoint
    ///
    /// Always `false` before the first observation.
    pub fn is_narrow(&self) -> bool {
        self.width.is_some_and(|w| w < NARROW_BREAKPOINT)
    }

    /// Whether any width has been observed yet
    pub fn has_observed(&self) -> bool {
        self.width.is_some()
    }

    /// Last observed width
    pub fn width(&self) -> Option<u32> {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeHost(Cell<Option<u32>>);

    impl ViewportHost for FakeHost {
        fn width(&self) -> Option<u32> {
            self.0.get()
        }
    }

    #[test]
    fn test_not_narrow_before_observation() {
        let classifier = ViewportClassifier::new();
        assert!(!classifier.is_narrow());
        assert!(!classifier.has_observed());
    }

    #[test]
    fn test_host_without_width_stays_unobserved() {
        let host = FakeHost(Cell::new(None));
        let mut classifier = ViewportClassifier::new();

        assert!(!classifier.observe(&host));
        assert!(!classifier.is_narrow());
        assert!(!classifier.has_observed());

        host.0.set(Some(320));
        assert!(classifier.observe(&host));
        assert!(classifier.is_narrow());
    }

    #[test]
    fn test_resize_flips_classification() {
        let host = FakeHost(Cell::new(Some(1024)));
        let mut classifier = ViewportClassifier::new();

        classifier.observe(&host);
        assert!(!classifier.is_narrow());

        host.0.set(Some(500));
        classifier.observe(&host);
        assert!(classifier.is_narrow());
        assert_eq!(classifier.width(), Some(500));
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let mut classifier = ViewportClassifier::new();

        classifier.record(NARROW_BREAKPOINT);
        assert!(!classifier.is_narrow());

        classifier.record(NARROW_BREAKPOINT - 1);
        assert!(classifier.is_narrow());
    }

    #[test]
    fn test_lost_width_keeps_last_observation() {
        let host = FakeHost(Cell::new(Some(600)));
        let mut classifier = ViewportClassifier::new();
        classifier.observe(&host);

        host.0.set(None);
        assert!(!classifier.observe(&host));
        assert!(classifier.is_narrow());
    }
}
