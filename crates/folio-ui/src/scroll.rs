#![forbid(unsafe_code)]

//! Smooth scrolling for click navigation.
//!
//! A [`SmoothScroll`] interpolates a document row offset from a start value
//! to a target over a distance-proportional duration with ease-in-out. The
//! caller samples [`SmoothScroll::offset`] on each tick; there is no
//! internal timer.

use std::time::{Duration, Instant};

/// Base duration for any animated scroll, even a one-row nudge.
const BASE: Duration = Duration::from_millis(150);
/// Additional duration per row of travel.
const PER_ROW: Duration = Duration::from_millis(5);
/// Ceiling so cross-document jumps stay snappy.
const MAX: Duration = Duration::from_millis(600);

/// Quadratic ease-in-out over [0, 1].
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Duration for an animated scroll across `distance` rows.
#[must_use]
pub fn duration_for(distance: usize) -> Duration {
    (BASE + PER_ROW * distance as u32).min(MAX)
}

/// An in-flight animated scroll between two row offsets.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    from: usize,
    to: usize,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    /// Start a scroll from `from` to `to` at `started`.
    #[must_use]
    pub fn new(from: usize, to: usize, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: duration_for(from.abs_diff(to)),
        }
    }

    /// Final offset this scroll lands on.
    #[must_use]
    pub fn target(&self) -> usize {
        self.to
    }

    /// Interpolated offset at `now`.
    #[must_use]
    pub fn offset(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_in_out(t);
        let from = self.from as f32;
        let to = self.to as f32;
        let pos = from + (to - from) * eased;
        pos.round().max(0.0) as usize
    }

    /// Whether the scroll has settled at `now`.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Redirect an in-flight scroll toward a new target, starting from the
    /// current interpolated position.
    pub fn retarget(&mut self, to: usize, now: Instant) {
        let from = self.offset(now);
        *self = Self::new(from, to, now);
    }
}
