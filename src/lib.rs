// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;
pub mod patterns;

// Re-export commonly used types
pub use crate::core::{RewriteOutcome, RunSummary, StripError};
pub use crate::io::FileWalker;
pub use crate::patterns::strip_auth;
