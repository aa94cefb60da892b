#![forbid(unsafe_code)]

//! Persisted UI preferences.
//!
//! A tiny string-keyed key-value contract behind a trait, so tests can
//! substitute an in-memory provider: read once at construction, written on
//! every change.
//!
//! # Degradation
//!
//! Storage trouble is never the user's problem. A missing, unreadable, or
//! corrupt file loads as empty; a failed write logs a warning and keeps the
//! in-memory value, so the feature degrades to session-only defaults rather
//! than surfacing an error.
//!
//! # File format
//!
//! A flat JSON object with a format version:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "entries": { "toc_collapsed": "true", "view_mode": "list" }
//! }
//! ```
//!
//! Writes use the temp-file + rename pattern so a crash mid-write cannot
//! corrupt existing state.

use std::collections::HashMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Key for the table-of-contents collapsed flag ("true"/"false").
pub const TOC_COLLAPSED: &str = "toc_collapsed";
/// Key for the project-list view mode ("card"/"list").
pub const VIEW_MODE: &str = "view_mode";

// ---------------------------------------------------------------------------
// Store trait + backends
// ---------------------------------------------------------------------------

/// String-keyed preference storage.
pub trait PreferenceStore: Send + Sync {
    /// Read a value. Absent keys and unavailable storage both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Failures are swallowed (logged, not surfaced).
    fn set(&self, key: &str, value: &str);
}

/// In-memory store: tests, and the degradation path when no state directory
/// is usable.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.data.write() {
            guard.insert(key.to_owned(), value.to_owned());
        }
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.data.read().map(|g| g.len()).unwrap_or(0);
        f.debug_struct("MemoryStore").field("entries", &count).finish()
    }
}

#[derive(Debug)]
enum StoreError {
    Io(std::io::Error),
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serialization(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

#[derive(Serialize, Deserialize)]
struct PrefsFile {
    format_version: u32,
    entries: HashMap<String, String>,
}

impl PrefsFile {
    const FORMAT_VERSION: u32 = 1;
}

/// JSON-file-backed store with an in-memory cache.
///
/// The file is read once at open; every `set` updates the cache and
/// rewrites the file atomically.
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, loading whatever state exists there.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let cache = match Self::load(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "preference load failed, starting empty");
                HashMap::new()
            }
        };
        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    /// Open the store at the default location for the application.
    ///
    /// Uses `$XDG_STATE_HOME/folio/prefs.json`, falling back to
    /// `~/.local/state` and finally the current directory.
    #[must_use]
    pub fn open_default() -> Self {
        Self::open(default_state_dir().join("folio").join("prefs.json"))
    }

    fn load(path: &Path) -> Result<HashMap<String, String>, StoreError> {
        if !path.exists() {
            // First run.
            return Ok(HashMap::new());
        }
        let file = File::open(path)?;
        let parsed: PrefsFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        if parsed.format_version != PrefsFile::FORMAT_VERSION {
            tracing::warn!(
                stored = parsed.format_version,
                expected = PrefsFile::FORMAT_VERSION,
                "preference file format mismatch, ignoring stored state"
            );
            return Ok(HashMap::new());
        }
        Ok(parsed.entries)
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        {
            let file = File::create(&tmp)?;
            let mut writer = BufWriter::new(file);
            let body = PrefsFile {
                format_version: PrefsFile::FORMAT_VERSION,
                entries: entries.clone(),
            };
            serde_json::to_writer_pretty(&mut writer, &body)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Path this store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let snapshot = {
            let Ok(mut guard) = self.cache.write() else {
                return;
            };
            guard.insert(key.to_owned(), value.to_owned());
            guard.clone()
        };
        if let Err(e) = self.persist(&snapshot) {
            tracing::warn!(path = %self.path.display(), error = %e, "preference write failed");
        }
    }
}

impl fmt::Debug for FileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore").field("path", &self.path).finish()
    }
}

/// State directory, falling back to the current dir if unavailable.
pub fn default_state_dir() -> PathBuf {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        return PathBuf::from(state_home);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("state");
    }
    PathBuf::from(".")
}

// ---------------------------------------------------------------------------
// Typed accessors
// ---------------------------------------------------------------------------

/// Project-list presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Card,
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewMode::Card => "card",
            ViewMode::List => "list",
        }
    }

    /// Parse a stored value; anything unrecognized is the default.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "list" => ViewMode::List,
            _ => ViewMode::Card,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Card => ViewMode::List,
            ViewMode::List => ViewMode::Card,
        }
    }
}

/// Read the ToC collapsed flag; absent or malformed means expanded.
#[must_use]
pub fn toc_collapsed(store: &dyn PreferenceStore) -> bool {
    store.get(TOC_COLLAPSED).as_deref() == Some("true")
}

pub fn set_toc_collapsed(store: &dyn PreferenceStore, collapsed: bool) {
    store.set(TOC_COLLAPSED, if collapsed { "true" } else { "false" });
}

/// Read the view mode; absent or malformed means card view.
#[must_use]
pub fn view_mode(store: &dyn PreferenceStore) -> ViewMode {
    store
        .get(VIEW_MODE)
        .map(|v| ViewMode::from_stored(&v))
        .unwrap_or_default()
}

pub fn set_view_mode(store: &dyn PreferenceStore, mode: ViewMode) {
    store.set(VIEW_MODE, mode.as_str());
}
