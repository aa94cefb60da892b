//! Cross-session persistence: preferences written in one "session" must be
//! in effect on the first paint of the next, with no flash of the opposite
//! default.

use std::sync::Arc;

use folio_app::screens::work::WorkScreen;
use folio_app::screens::{Shared, project::ProjectScreen};
use folio_content::ProjectId;
use folio_ui::prefs::{self, PreferenceStore, ViewMode};
use folio_ui::{FileStore, TocState};

fn session(path: &std::path::Path) -> Shared {
    let store: Arc<dyn PreferenceStore> = Arc::new(FileStore::open(path));
    Shared::without_clipboard(store)
}

#[test]
fn collapsed_toc_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    // Session one: the user collapses the ToC.
    {
        let shared = session(&path);
        prefs::set_toc_collapsed(&*shared.prefs, true);
    }

    // Session two: the screen is constructed collapsed before any render.
    let shared = session(&path);
    let screen = ProjectScreen::new(ProjectId(1), &shared);
    assert!(screen.toc().is_collapsed());
}

#[test]
fn expanded_default_applies_on_first_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let shared = session(&dir.path().join("prefs.json"));
    let screen = ProjectScreen::new(ProjectId(1), &shared);
    assert!(!screen.toc().is_collapsed());
}

#[test]
fn list_view_mode_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    {
        let shared = session(&path);
        prefs::set_view_mode(&*shared.prefs, ViewMode::List);
    }

    let shared = session(&path);
    let screen = WorkScreen::new(&shared);
    assert_eq!(screen.view_mode(), ViewMode::List);
}

#[test]
fn pin_writes_expanded_state_for_next_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("prefs.json");

    {
        let shared = session(&path);
        prefs::set_toc_collapsed(&*shared.prefs, true);

        // The user hovers the collapsed widget and pins it open.
        let mut toc = TocState::new(
            folio_content::outline(&folio_content::studies::icons()),
            prefs::toc_collapsed(&*shared.prefs),
        );
        toc.hover_enter();
        toc.pin(std::time::Instant::now());
        prefs::set_toc_collapsed(&*shared.prefs, toc.is_collapsed());
    }

    let shared = session(&path);
    assert!(!prefs::toc_collapsed(&*shared.prefs));
}
