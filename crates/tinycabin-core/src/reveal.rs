//! One-way reveal tracking for scroll-triggered animation.
//!
//! Elements flagged for reveal start hidden and offset; the first time
//! at least [`REVEAL_THRESHOLD`] of one enters the viewport it flips to
//! its revealed style and stays there. The intersection watcher in the
//! webview may report the same element any number of times; `report` is
//! idempotent so re-arming the watcher is harmless.
//!
//! A second instance of [`RevealSet`] backs deferred image loading,
//! which has the same once-only semantics.

use std::collections::BTreeSet;

/// Fraction of an element that must be visible to trigger its reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// The effective trigger line sits this far above the viewport's bottom
/// edge (IntersectionObserver rootMargin).
pub const REVEAL_BOTTOM_MARGIN_PX: u32 = 100;

/// The set of element ids that have crossed the reveal threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: BTreeSet<String>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report. Returns true only the first time
    /// the element crosses the threshold; already-revealed elements are
    /// not re-processed.
    pub fn report(&mut self, id: &str, ratio: f64) -> bool {
        if ratio < REVEAL_THRESHOLD {
            return false;
        }
        if self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_string());
        true
    }

    /// Whether the element has been revealed.
    pub fn contains(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_at_threshold() {
        let mut set = RevealSet::new();
        assert!(set.report("hero", 0.1));
        assert!(set.contains("hero"));
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut set = RevealSet::new();
        assert!(!set.report("hero", 0.05));
        assert!(!set.contains("hero"));
    }

    #[test]
    fn repeated_reports_are_idempotent() {
        let mut set = RevealSet::new();
        assert!(set.report("card-1", 0.4));
        assert!(!set.report("card-1", 0.9));
        assert!(!set.report("card-1", 1.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn scrolling_back_out_does_not_unreveal() {
        let mut set = RevealSet::new();
        set.report("card-2", 0.5);
        // Watcher reports the element leaving the viewport.
        set.report("card-2", 0.0);
        assert!(set.contains("card-2"));
    }

    #[test]
    fn elements_are_tracked_independently() {
        let mut set = RevealSet::new();
        set.report("a", 0.2);
        assert!(set.contains("a"));
        assert!(!set.contains("b"));
    }
}
