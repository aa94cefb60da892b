#![forbid(unsafe_code)]

//! Scroll-spy table of contents.
//!
//! [`TocState`] owns the live outline of a mounted case study: which heading
//! is active, whether the widget is collapsed, and the timing windows that
//! keep the indicator honest while the user interacts.
//!
//! # State machine
//!
//! `Uninitialized → Ready → [Navigating] → Ready`. `Navigating` is the
//! transient window opened by a click: the clicked heading becomes active
//! immediately (the user's intent is authoritative, not the geometry), and
//! visibility samples are received but discarded until the estimated settle
//! duration elapses, so the indicator cannot jump to a neighboring heading
//! mid-scroll.
//!
//! # Invariants
//!
//! 1. At most one heading is active at a time.
//! 2. While the navigation window is open, nothing but another navigation
//!    changes the active heading.
//! 3. Visibility updates pick the entry with the greatest intersection
//!    ratio; ties keep the first-reported entry.
//! 4. An empty outline renders nothing and never activates anything.
//!
//! All methods take `now` explicitly; the widget never reads a clock.

use std::time::Duration;
use std::time::Instant;

use folio_content::TocItem;

use crate::debounce::DebounceGuard;
use crate::tracker::VisibilityEntry;

/// Timing and geometry constants for the widget.
///
/// Distances are row-denominated; timing windows are sub-second except the
/// navigation settle floor.
#[derive(Debug, Clone, Copy)]
pub struct TocConfig {
    /// Rows of clearance above a navigated-to heading, tuned to the shell
    /// header's height.
    pub header_clearance: usize,
    /// Floor for the post-navigation settle window.
    pub min_settle: Duration,
    /// Additional settle time per row of scroll distance.
    pub settle_per_row: Duration,
    /// Continuous hover required before a control tooltip opens.
    pub tooltip_delay: Duration,
    /// Tooltip suppression window after a pin action.
    pub pin_cooldown: Duration,
    /// Size/position transition freeze after a pin, one layout pass long.
    pub pin_freeze: Duration,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            header_clearance: 4,
            min_settle: Duration::from_millis(800),
            settle_per_row: Duration::from_millis(10),
            tooltip_delay: Duration::from_millis(400),
            pin_cooldown: Duration::from_millis(1000),
            pin_freeze: Duration::from_millis(50),
        }
    }
}

/// A control carrying a delayed tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocControl {
    /// The collapse button on the expanded widget.
    Collapse,
    /// The pin button on the hover overlay.
    Pin,
}

#[derive(Debug, Clone, Copy, Default)]
struct TooltipTimer {
    hover_since: Option<Instant>,
}

/// Live state for one mounted table of contents.
#[derive(Debug)]
pub struct TocState {
    items: Vec<TocItem>,
    active: Option<&'static str>,
    initial_set: bool,
    collapsed: bool,
    hovering: bool,
    /// Open while a click navigation is settling; visibility samples are
    /// discarded until it closes.
    suppress: DebounceGuard,
    /// Tooltip cooldown after a pin.
    just_pinned: DebounceGuard,
    /// Transition freeze after a pin.
    freeze: DebounceGuard,
    collapse_tip: TooltipTimer,
    pin_tip: TooltipTimer,
    config: TocConfig,
}

impl TocState {
    /// Mount the widget over a scanned outline.
    ///
    /// `collapsed` comes from the preference store, read before the first
    /// render so the widget never flashes the opposite default.
    #[must_use]
    pub fn new(items: Vec<TocItem>, collapsed: bool) -> Self {
        Self::with_config(items, collapsed, TocConfig::default())
    }

    #[must_use]
    pub fn with_config(items: Vec<TocItem>, collapsed: bool, config: TocConfig) -> Self {
        Self {
            items,
            active: None,
            initial_set: false,
            collapsed,
            hovering: false,
            suppress: DebounceGuard::new(),
            just_pinned: DebounceGuard::new(),
            freeze: DebounceGuard::new(),
            collapse_tip: TooltipTimer::default(),
            pin_tip: TooltipTimer::default(),
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Whether there is anything to render. An empty document is valid; the
    /// widget simply does not exist for it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[TocItem] {
        &self.items
    }

    /// The heading currently marked as in view, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&'static str> {
        self.active
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether the transient expanded overlay is showing over the collapsed
    /// widget.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.collapsed && self.hovering
    }

    /// False for exactly one layout pass after a pin, so the expansion does
    /// not visibly jump.
    #[must_use]
    pub fn transition_enabled(&self, now: Instant) -> bool {
        !self.freeze.is_active(now)
    }

    /// Whether a click navigation is still settling at `now`.
    #[must_use]
    pub fn is_navigating(&self, now: Instant) -> bool {
        self.suppress.is_active(now)
    }

    /// Tooltip visibility for a control at `now`: requires continuous hover
    /// past the delay and no post-pin cooldown.
    #[must_use]
    pub fn tooltip_visible(&self, control: TocControl, now: Instant) -> bool {
        let timer = match control {
            TocControl::Collapse => &self.collapse_tip,
            TocControl::Pin => &self.pin_tip,
        };
        let hovered_long_enough = timer
            .hover_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.config.tooltip_delay);
        hovered_long_enough && !self.just_pinned.is_active(now)
    }

    // -----------------------------------------------------------------------
    // Visibility tracking
    // -----------------------------------------------------------------------

    /// Initial-active fallback, run once right after the tracker attaches.
    ///
    /// If no heading was reported visible but the first heading's top edge
    /// is above the viewport bottom, the first heading becomes active. This
    /// covers a first section already fully in view, which would otherwise
    /// never cross into the band from outside.
    pub fn ensure_initial_active(&mut self, first_heading_in_view: bool) {
        if self.initial_set || self.items.is_empty() || !first_heading_in_view {
            return;
        }
        self.active = Some(self.items[0].id);
        self.initial_set = true;
    }

    /// Feed one visibility sample.
    ///
    /// Entries must arrive in document order (the tracker contract). The
    /// greatest ratio wins; a strictly-greater comparison keeps the first
    /// entry on ties. An empty sample never clears an established active
    /// heading, and samples inside the navigation window are discarded.
    pub fn on_visibility(&mut self, entries: &[VisibilityEntry], now: Instant) {
        if self.suppress.is_active(now) {
            return;
        }
        let mut most_visible: Option<&VisibilityEntry> = None;
        for entry in entries {
            match most_visible {
                Some(best) if entry.ratio <= best.ratio => {}
                _ => most_visible = Some(entry),
            }
        }
        if let Some(best) = most_visible {
            self.active = Some(best.id);
            self.initial_set = true;
        }
    }

    // -----------------------------------------------------------------------
    // Click navigation
    // -----------------------------------------------------------------------

    /// Navigate to a heading by anchor id.
    ///
    /// Sets the active heading immediately, opens the suppression window
    /// sized to the scroll distance, and returns the scroll target: the
    /// heading's document row minus the header clearance. Returns `None`
    /// for ids not in the outline.
    pub fn navigate_to(
        &mut self,
        id: &str,
        anchor_row: usize,
        current_offset: usize,
        now: Instant,
    ) -> Option<usize> {
        let item = self.items.iter().find(|item| item.id == id)?;
        self.active = Some(item.id);
        self.initial_set = true;

        let target = anchor_row.saturating_sub(self.config.header_clearance);
        let distance = target.abs_diff(current_offset);
        let settle = self
            .config
            .min_settle
            .max(self.config.settle_per_row * distance as u32);
        self.suppress.trip(now, settle);
        Some(target)
    }

    // -----------------------------------------------------------------------
    // Collapse / pin / hover
    // -----------------------------------------------------------------------

    /// Collapse to the indicator-bar form. Caller persists the new flag.
    pub fn collapse(&mut self) {
        self.collapsed = true;
        self.hovering = false;
        self.collapse_tip.hover_since = None;
    }

    /// Expand by clicking the collapsed widget body (only honored when the
    /// hover overlay is not showing, which owns clicks while visible).
    /// Caller persists the new flag.
    pub fn expand_via_click(&mut self) {
        if self.collapsed && !self.hovering {
            self.collapsed = false;
        }
    }

    /// Pin: expand permanently from the hover overlay. Freezes the size
    /// transition for one layout pass and opens the tooltip cooldown so a
    /// tooltip does not flash over a control that just moved. Caller
    /// persists the new flag.
    pub fn pin(&mut self, now: Instant) {
        // Cooldown first, so no tooltip can qualify between here and the
        // next render.
        self.just_pinned.trip(now, self.config.pin_cooldown);
        self.collapse_tip.hover_since = None;
        self.pin_tip.hover_since = None;
        self.freeze.trip(now, self.config.pin_freeze);
        self.collapsed = false;
        self.hovering = false;
    }

    /// Pointer entered the widget. Only meaningful while collapsed: raises
    /// the transient expanded overlay.
    pub fn hover_enter(&mut self) {
        if self.collapsed {
            self.hovering = true;
        }
    }

    /// Pointer left the widget. Dismisses the overlay without touching the
    /// persisted collapsed flag.
    pub fn hover_leave(&mut self) {
        self.hovering = false;
        self.collapse_tip.hover_since = None;
        self.pin_tip.hover_since = None;
    }

    /// Pointer entered a tooltip-bearing control.
    pub fn control_hover_enter(&mut self, control: TocControl, now: Instant) {
        // During the post-pin cooldown the timer is not even armed, so a
        // held hover cannot ripen into a tooltip the instant it ends.
        if self.just_pinned.is_active(now) {
            return;
        }
        let timer = match control {
            TocControl::Collapse => &mut self.collapse_tip,
            TocControl::Pin => &mut self.pin_tip,
        };
        if timer.hover_since.is_none() {
            timer.hover_since = Some(now);
        }
    }

    /// Pointer left a tooltip-bearing control.
    pub fn control_hover_leave(&mut self, control: TocControl) {
        let timer = match control {
            TocControl::Collapse => &mut self.collapse_tip,
            TocControl::Pin => &mut self.pin_tip,
        };
        timer.hover_since = None;
    }
}
