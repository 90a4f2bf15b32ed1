//! Shared types for the rewrite run.

pub mod errors;

pub use errors::StripError;

/// Result of pushing one file through the rewrite pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Content changed and the file was (or would be, in dry-run) rewritten.
    Modified,
    /// Content came out byte-identical; nothing was written.
    Unchanged,
}

/// Aggregate counters for a full directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_found: usize,
    pub files_modified: usize,
    pub files_failed: usize,
}
