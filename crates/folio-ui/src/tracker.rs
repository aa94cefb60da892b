#![forbid(unsafe_code)]

//! Viewport visibility tracking.
//!
//! A heading counts as "in the reading zone" while its line range overlaps
//! the band between 15% and 30% of viewport depth: deep enough that a
//! heading is not considered read the moment it touches the top row,
//! shallow enough that a heading still mostly below the fold is not
//! activated early.
//!
//! The [`VisibilityTracker`] trait is the seam: the ToC state machine only
//! ever sees [`VisibilityEntry`] batches, so tests can feed synthetic
//! geometry and another backend could replace [`LineBandTracker`] without
//! touching the widget.
//!
//! # Ordering
//!
//! Samples report intersecting anchors in document order. Combined with the
//! widget's strictly-greater ratio comparison this makes tie-breaking
//! deterministic: first in document order wins.

/// Top of the reading band, as a fraction of viewport height.
const BAND_TOP: f32 = 0.15;
/// Bottom of the reading band: a heading stops counting as visible once it
/// would sit below 30% of viewport depth.
const BAND_BOTTOM: f32 = 0.30;

/// A scrolled view over the laid-out document, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible document row.
    pub top: usize,
    /// Visible height in rows.
    pub height: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    /// One past the last visible document row.
    #[must_use]
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// An observed heading: its anchor id and the line range its visual block
/// occupies in the laid-out document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub id: &'static str,
    /// First row of the heading block.
    pub start: usize,
    /// Height of the heading block in rows.
    pub len: usize,
}

/// One sample result: an anchor currently intersecting the reading band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub id: &'static str,
    /// Fraction of the anchor's block inside the band, in (0, 1].
    pub ratio: f32,
}

/// The reading band for a viewport, in fractional document rows.
#[must_use]
pub fn reading_band(viewport: Viewport) -> (f32, f32) {
    let top = viewport.top as f32 + viewport.height as f32 * BAND_TOP;
    let bottom = viewport.top as f32 + viewport.height as f32 * BAND_BOTTOM;
    (top, bottom)
}

/// Fraction of `anchor` inside `band`.
#[must_use]
pub fn intersection_ratio(anchor: Anchor, band: (f32, f32)) -> f32 {
    if anchor.len == 0 {
        return 0.0;
    }
    let start = anchor.start as f32;
    let end = start + anchor.len as f32;
    let overlap = (end.min(band.1) - start.max(band.0)).max(0.0);
    overlap / anchor.len as f32
}

/// The viewport-visibility capability.
pub trait VisibilityTracker {
    /// Replace the observed set. Anchors must be given in document order.
    fn observe(&mut self, anchors: Vec<Anchor>);

    /// Release every observation.
    fn unobserve_all(&mut self);

    /// Report anchors currently intersecting the reading band, in document
    /// order, with their intersection ratios.
    fn sample(&self, viewport: Viewport) -> Vec<VisibilityEntry>;
}

/// Polling tracker over laid-out line geometry.
///
/// Owned by the page that mounted it; dropping the page drops the tracker
/// and with it every observation, so teardown cannot leak observers on any
/// exit path.
#[derive(Debug, Default)]
pub struct LineBandTracker {
    anchors: Vec<Anchor>,
}

impl LineBandTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The first observed anchor, if any. Used by the ToC's initial-active
    /// fallback.
    #[must_use]
    pub fn first_anchor(&self) -> Option<Anchor> {
        self.anchors.first().copied()
    }
}

impl VisibilityTracker for LineBandTracker {
    fn observe(&mut self, anchors: Vec<Anchor>) {
        self.anchors = anchors;
    }

    fn unobserve_all(&mut self) {
        self.anchors.clear();
    }

    fn sample(&self, viewport: Viewport) -> Vec<VisibilityEntry> {
        let band = reading_band(viewport);
        self.anchors
            .iter()
            .filter_map(|&anchor| {
                let ratio = intersection_ratio(anchor, band);
                (ratio > 0.0).then_some(VisibilityEntry {
                    id: anchor.id,
                    ratio,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(id: &'static str, start: usize) -> Anchor {
        Anchor { id, start, len: 3 }
    }

    #[test]
    fn band_sits_in_upper_viewport() {
        let (top, bottom) = reading_band(Viewport::new(100, 40));
        assert_eq!(top, 106.0);
        assert_eq!(bottom, 112.0);
    }

    #[test]
    fn anchor_outside_band_reports_zero() {
        let band = reading_band(Viewport::new(0, 40));
        assert_eq!(intersection_ratio(anchor("a", 30), band), 0.0);
        // Above the band (still on screen, but past the reading zone).
        assert_eq!(intersection_ratio(anchor("b", 1), band), 0.0);
    }

    #[test]
    fn full_containment_reports_one() {
        let band = reading_band(Viewport::new(0, 100)); // band rows 15..30
        assert_eq!(intersection_ratio(anchor("a", 20), band), 1.0);
    }

    #[test]
    fn partial_overlap_is_proportional() {
        let band = reading_band(Viewport::new(0, 100)); // 15.0..30.0
        // Block rows 28..31: two of three rows inside the band.
        let ratio = intersection_ratio(anchor("a", 28), band);
        assert!((ratio - 2.0 / 3.0).abs() < 1e-6, "ratio {ratio}");
    }

    #[test]
    fn sample_reports_document_order() {
        let mut tracker = LineBandTracker::new();
        tracker.observe(vec![anchor("first", 16), anchor("second", 20)]);
        let entries = tracker.sample(Viewport::new(0, 100));
        let ids: Vec<&str> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn sample_excludes_non_intersecting() {
        let mut tracker = LineBandTracker::new();
        tracker.observe(vec![anchor("in", 20), anchor("out", 80)]);
        let entries = tracker.sample(Viewport::new(0, 100));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "in");
    }

    #[test]
    fn unobserve_all_clears() {
        let mut tracker = LineBandTracker::new();
        tracker.observe(vec![anchor("a", 20)]);
        tracker.unobserve_all();
        assert!(tracker.sample(Viewport::new(0, 100)).is_empty());
        assert!(tracker.first_anchor().is_none());
    }

    #[test]
    fn zero_height_anchor_never_intersects() {
        let band = reading_band(Viewport::new(0, 100));
        let zero = Anchor {
            id: "z",
            start: 20,
            len: 0,
        };
        assert_eq!(intersection_ratio(zero, band), 0.0);
    }
}
