#![forbid(unsafe_code)]

//! Interaction state machines for the Folio terminal portfolio.
//!
//! Everything here is terminal-agnostic: no rendering, no event decoding,
//! no clock reads. Each machine takes `now: Instant` from the caller, so
//! the whole crate is deterministic under test.
//!
//! The pieces, in dependency order:
//!
//! - [`debounce`]: a fixed-window suppress guard reused by every "ignore
//!   this signal for a moment" behavior.
//! - [`scroll`]: easing functions and the distance-proportional smooth
//!   scroll used for click navigation.
//! - [`header`]: scroll-direction-aware page-shell header visibility.
//! - [`tracker`]: the viewport-visibility capability — reading-band math,
//!   the [`tracker::VisibilityTracker`] seam, and the line-geometry
//!   implementation.
//! - [`toc`]: the scroll-spy table-of-contents state machine.
//! - [`prefs`]: the persisted preference store (collapsed flag, view mode).

pub mod debounce;
pub mod header;
pub mod prefs;
pub mod scroll;
pub mod toc;
pub mod tracker;

pub use debounce::DebounceGuard;
pub use header::HeaderVisibility;
pub use prefs::{FileStore, MemoryStore, PreferenceStore, ViewMode};
pub use scroll::SmoothScroll;
pub use toc::{TocConfig, TocState};
pub use tracker::{Anchor, LineBandTracker, Viewport, VisibilityEntry, VisibilityTracker};
