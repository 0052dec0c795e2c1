//! Typed errors for the library layer.
//!
//! Commands work with `anyhow::Result`; the pure formatting code and the
//! group store report failures through these enums so callers can decide
//! whether a failure is fatal or only worth a warning.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeFormatError {
    #[error("Invalid time format: `{0}` (expected HH:MM:SS)")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid group log {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("Failed to serialize groups: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
