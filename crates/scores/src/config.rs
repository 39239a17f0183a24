//! Store location configuration.

use std::io;
use std::path::{Path, PathBuf};

use crate::types::{DEFAULT_HIGHSCORES_FILE, HIGHSCORES_PATH_ENV};

/// Where the high-score table is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    /// `highscores.json` next to the running executable, so the table does not
    /// depend on the caller's working directory. If the executable path is
    /// unavailable, the working directory at construction time is used instead.
    fn default() -> Self {
        Self {
            path: store_dir(std::env::current_exe()).join(DEFAULT_HIGHSCORES_FILE),
        }
    }
}

/// Directory holding `exe`, else the current directory resolved once.
fn store_dir(exe: io::Result<PathBuf>) -> PathBuf {
    exe.ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location, overridden by `BLOCKFALL_HIGHSCORES` when set and non-empty.
    pub fn from_env() -> Self {
        std::env::var(HIGHSCORES_PATH_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
