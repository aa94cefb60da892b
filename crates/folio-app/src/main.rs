#![forbid(unsafe_code)]

//! The `folio` binary entry point.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use folio_app::app::App;
use folio_app::screens::{ScreenId, Shared};
use folio_app::{cli, logging};
use folio_content::ProjectId;
use folio_ui::FileStore;
use folio_ui::prefs::{self, PreferenceStore};

fn main() {
    let opts = cli::Opts::parse();

    let state_dir = opts
        .state_dir
        .clone()
        .unwrap_or_else(prefs::default_state_dir);
    logging::init(&state_dir);

    let store: Arc<dyn PreferenceStore> =
        Arc::new(FileStore::open(state_dir.join("folio").join("prefs.json")));
    let shared = Shared::new(store);

    let start = match opts.project {
        Some(id) => ScreenId::Project(ProjectId(id)),
        None if opts.screen == "about" => ScreenId::About,
        None => ScreenId::Work,
    };
    let exit_after = (opts.exit_after_ms > 0).then(|| Duration::from_millis(opts.exit_after_ms));

    let mut app = App::new(start, shared);

    let mut terminal = ratatui::init();
    if opts.mouse {
        let _ = execute!(io::stdout(), EnableMouseCapture);
    }
    let result = app.run(&mut terminal, exit_after);
    if opts.mouse {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
