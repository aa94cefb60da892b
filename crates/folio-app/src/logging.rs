#![forbid(unsafe_code)]

//! File-backed tracing setup.
//!
//! The application owns the terminal, so logs go to
//! `<state-dir>/folio/folio.log` instead of stderr. `FOLIO_LOG` selects the
//! filter (tracing env-filter syntax, default `info`). Setup failures are
//! swallowed: a portfolio without a log file still works.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to a log file under `state_dir`.
pub fn init(state_dir: &Path) {
    let dir = state_dir.join("folio");
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("folio.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
