//! Where the tournament snapshot lives on disk.
//! Override with env: BRACKET_STORE_PATH (e.g. /var/lib/bracket/tournament.json).

use std::env;
use std::path::PathBuf;

/// Environment variable naming the snapshot file.
pub const STORE_PATH_VAR: &str = "BRACKET_STORE_PATH";

fn default_store_path() -> PathBuf {
    PathBuf::from("beerpong-tournament.json")
}

/// Settings for [`crate::SnapshotStore`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read `BRACKET_STORE_PATH`; blank or unset falls back to the default file name.
    pub fn from_env() -> Self {
        let path = env::var(STORE_PATH_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_store_path);
        Self { path }
    }
}
