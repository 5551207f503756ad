//! Snapshot persistence: one JSON file holding the whole tournament.

use crate::config::StoreConfig;
use crate::models::Tournament;
use std::fs;
use std::io;
use std::path::Path;

/// Errors writing or deleting the snapshot. Reading never fails; see [`SnapshotStore::load`].
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "snapshot I/O failed: {}", e),
            StoreError::Serialize(e) => write!(f, "snapshot encoding failed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialize(e)
    }
}

/// File-backed store for the single tournament snapshot.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    config: StoreConfig,
}

impl SnapshotStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// The stored tournament. Missing, unreadable or corrupt data all mean "no tournament".
    pub fn load(&self) -> Option<Tournament> {
        let path = self.path();
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Failed to read tournament data {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(tournament) => Some(tournament),
            Err(e) => {
                log::warn!("Failed to parse tournament data {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Overwrite the stored snapshot.
    pub fn save(&self, tournament: &Tournament) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(tournament)?;
        fs::write(self.path(), payload)?;
        log::debug!("Saved tournament {} to {}", tournament.id, self.path().display());
        Ok(())
    }

    /// Delete the stored snapshot. Already absent is fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
