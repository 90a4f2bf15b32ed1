pub mod walker;

pub use walker::FileWalker;

use crate::core::StripError;
use std::fs;
use std::path::Path;

/// Reads a file's full content, tagging any failure with the path.
pub fn read_file(path: &Path) -> Result<String, StripError> {
    fs::read_to_string(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrites a file with new content in a single write.
pub fn write_file(path: &Path, content: &str) -> Result<(), StripError> {
    fs::write(path, content).map_err(|source| StripError::Write {
        path: path.to_path_buf(),
        source,
    })
}
