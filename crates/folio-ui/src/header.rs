#![forbid(unsafe_code)]

//! Page-shell header visibility.
//!
//! The header hides while the reader scrolls down and comes back on any
//! upward intent or near the top of the page. Transitions are animated via
//! [`HeaderVisibility::reveal_fraction`]; the state itself is two
//! comparisons against the last observed offset.
//!
//! No failure modes: this is purely presentational state.

use std::time::{Duration, Instant};

use crate::scroll::ease_out;

/// Below this offset the header always shows, regardless of direction.
const TOP_SHOW_THRESHOLD: usize = 1;
/// Downward scrolling only hides the header past this offset, so the header
/// does not flicker while the reader hovers near the top.
const HIDE_ACTIVATION_THRESHOLD: usize = 5;
/// Length of the show/hide transition.
const REVEAL_ANIM: Duration = Duration::from_millis(300);

/// Scroll-direction-aware header visibility.
#[derive(Debug, Clone, Copy)]
pub struct HeaderVisibility {
    last_offset: usize,
    visible: bool,
    changed_at: Option<Instant>,
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self {
            last_offset: 0,
            visible: true,
            changed_at: None,
        }
    }
}

impl HeaderVisibility {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scroll observation.
    pub fn on_scroll(&mut self, offset: usize, now: Instant) {
        let show = offset < self.last_offset || offset < TOP_SHOW_THRESHOLD;
        let hide = offset > self.last_offset && offset > HIDE_ACTIVATION_THRESHOLD;

        if show && !self.visible {
            self.visible = true;
            self.changed_at = Some(now);
        } else if hide && self.visible {
            self.visible = false;
            self.changed_at = Some(now);
        }

        self.last_offset = offset;
    }

    /// Logical visibility (the animation target).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Animated reveal in [0, 1]: 1.0 fully shown, 0.0 fully hidden.
    #[must_use]
    pub fn reveal_fraction(&self, now: Instant) -> f32 {
        let settled = if self.visible { 1.0 } else { 0.0 };
        let Some(changed) = self.changed_at else {
            return settled;
        };
        let elapsed = now.saturating_duration_since(changed);
        if elapsed >= REVEAL_ANIM {
            return settled;
        }
        let t = ease_out(elapsed.as_secs_f32() / REVEAL_ANIM.as_secs_f32());
        if self.visible { t } else { 1.0 - t }
    }
}
