//! Snapshot persistence.
//!
//! Both persisted artifacts -- the timer sequence and the user
//! settings -- are JSON files in the data directory, always written
//! in full-replace form by a single writer.

mod snapshot;

pub use snapshot::SnapshotFile;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/grillmaster[-dev]/` based on GRILLMASTER_ENV.
///
/// Set GRILLMASTER_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("GRILLMASTER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("grillmaster-dev")
    } else {
        base_dir.join("grillmaster")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
