//! Core error types for grillmaster-core.
//!
//! The error surface is narrow: every store transition is total over
//! well-formed input, so errors only arise at the storage boundary and
//! at input validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for grillmaster-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Timer input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a snapshot file
    #[error("Failed to read snapshot at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a snapshot file
    #[error("Failed to write snapshot to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot exists but does not parse as the expected schema
    #[error("Malformed snapshot at {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// Failed to serialize a snapshot
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    /// Data directory cannot be determined or created
    #[error("Cannot prepare data directory: {0}")]
    DataDir(String),
}

/// Timer input validation errors.
///
/// Raised at the driver boundary; the store itself never sees
/// invalid input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Timer name must not be empty")]
    EmptyName,

    #[error("Timer duration must be a positive number of seconds")]
    NonPositiveDuration,

    #[error("Flip interval must be a positive number of seconds")]
    NonPositiveFlipInterval,

    /// Unknown settings key
    #[error("Unknown settings key: {0}")]
    UnknownKey(String),

    /// Settings value cannot be parsed for the given key
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
