//! Roster store error types.
//!
//! File I/O failures are non-fatal by policy: the store reports them and
//! keeps its in-memory state, so callers log and continue.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving the persisted roster file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The roster file exists but could not be read.
    #[error("failed to read roster file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The roster file could not be written (permissions, disk full).
    #[error("failed to write roster file {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// The roster file path the failed operation targeted.
    pub fn path(&self) -> &PathBuf {
        match self {
            StoreError::Load { path, .. } | StoreError::Save { path, .. } => path,
        }
    }
}
