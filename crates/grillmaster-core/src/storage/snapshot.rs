//! JSON snapshot of the timer sequence.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::timer::Timer;

/// File holding the full persisted timer sequence.
///
/// There is exactly one writer (the driver) and every write replaces
/// the whole file, so partial-update races cannot occur.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Snapshot at the default location, `<data dir>/timers.json`.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: super::data_dir()?.join("timers.json"),
        })
    }

    /// Snapshot at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted sequence. `Ok(None)` when no snapshot exists.
    ///
    /// # Errors
    /// Returns [`StorageError::Malformed`] when the file exists but does
    /// not parse; the caller decides the fallback policy.
    pub fn load(&self) -> Result<Option<Vec<Timer>>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        let timers = serde_json::from_str(&content).map_err(|e| StorageError::Malformed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(timers))
    }

    /// Overwrite the snapshot with the given sequence.
    pub fn save(&self, timers: &[Timer]) -> Result<(), StorageError> {
        let content = serde_json::to_string(timers)?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}
