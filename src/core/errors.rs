//! Error types for per-file processing.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failure while processing a single file. Contained at file granularity:
/// the directory loop reports it and moves on, never aborting the run.
#[derive(Debug, Error)]
pub enum StripError {
    /// Reading the file failed (missing, unreadable, or not valid UTF-8).
    #[error("failed to read file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the rewritten content back failed.
    #[error("failed to write file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StripError {
    /// The file the failure belongs to.
    pub fn path(&self) -> &Path {
        match self {
            StripError::Read { path, .. } | StripError::Write { path, .. } => path,
        }
    }
}
