#![forbid(unsafe_code)]

//! Screens: one module per navigable page.
//!
//! Each screen owns its own state and implements [`Screen`]; the app model
//! dispatches events to the current one and swaps screens on navigation.
//! Screens never read clocks — `now` flows in from the event loop.

pub mod about;
pub mod project;
pub mod work;

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use folio_content::ProjectId;
use folio_content::site;
use folio_ui::DebounceGuard;
use folio_ui::prefs::PreferenceStore;
use ratatui::Frame;
use ratatui::layout::Rect;

/// How long the footer shows "Copied!" after a successful clipboard write.
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Chrome tabs in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Work,
    About,
}

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Work,
    About,
    Project(ProjectId),
}

impl ScreenId {
    /// The nav tab to highlight for this page. Detail pages highlight
    /// neither.
    #[must_use]
    pub fn nav_tab(self) -> Option<NavTab> {
        match self {
            ScreenId::Work => Some(NavTab::Work),
            ScreenId::About => Some(NavTab::About),
            ScreenId::Project(_) => None,
        }
    }
}

/// What a screen asks the app to do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    None,
    Navigate(ScreenId),
    Quit,
}

/// State shared across screens: the preference store, the clipboard, and
/// the footer's copy feedback.
pub struct Shared {
    pub prefs: Arc<dyn PreferenceStore>,
    clipboard: Option<arboard::Clipboard>,
    copied: DebounceGuard,
}

impl Shared {
    /// Build the shared context. The clipboard is acquired once and kept
    /// alive for the whole session (some platforms drop pending clipboard
    /// contents with the handle).
    #[must_use]
    pub fn new(prefs: Arc<dyn PreferenceStore>) -> Self {
        let clipboard = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                None
            }
        };
        Self {
            prefs,
            clipboard,
            copied: DebounceGuard::new(),
        }
    }

    /// Test constructor without a clipboard.
    #[must_use]
    pub fn without_clipboard(prefs: Arc<dyn PreferenceStore>) -> Self {
        Self {
            prefs,
            clipboard: None,
            copied: DebounceGuard::new(),
        }
    }

    /// Copy the contact address. On success the footer shows a confirmation
    /// for a moment; on failure the user simply sees no confirmation.
    pub fn copy_email(&mut self, now: Instant) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            tracing::warn!("email copy skipped: no clipboard");
            return;
        };
        match clipboard.set_text(site::EMAIL.to_owned()) {
            Ok(()) => self.copied.trip(now, COPIED_FEEDBACK),
            Err(e) => tracing::warn!(error = %e, "email copy failed"),
        }
    }

    /// Whether the "Copied!" confirmation is showing at `now`.
    #[must_use]
    pub fn email_copied(&self, now: Instant) -> bool {
        self.copied.is_active(now)
    }
}

/// Trait for navigable pages.
pub trait Screen {
    /// Title for logs and debugging.
    fn title(&self) -> &'static str;

    /// Handle one terminal event.
    fn update(&mut self, event: &Event, shared: &mut Shared, now: Instant) -> Outcome;

    /// Called on each application tick.
    fn tick(&mut self, _now: Instant) {}

    /// Render into the content area. Takes `&mut self` so screens can
    /// re-layout on resize and record hit geometry for mouse handling.
    fn view(&mut self, frame: &mut Frame, area: Rect, shared: &Shared, now: Instant);

    /// Animated header reveal for the chrome, 1.0 when fully shown.
    fn header_reveal(&self, _now: Instant) -> f32 {
        1.0
    }

    /// Whether the shared footer renders under this screen.
    fn shows_footer(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_pages_highlight_no_tab() {
        assert_eq!(ScreenId::Work.nav_tab(), Some(NavTab::Work));
        assert_eq!(ScreenId::About.nav_tab(), Some(NavTab::About));
        assert_eq!(ScreenId::Project(ProjectId(1)).nav_tab(), None);
    }

    #[test]
    fn copy_without_clipboard_degrades_silently() {
        let prefs = Arc::new(folio_ui::MemoryStore::new());
        let mut shared = Shared::without_clipboard(prefs);
        let now = Instant::now();
        shared.copy_email(now);
        assert!(!shared.email_copied(now));
    }
}
