//! Auth rewrite pattern library.
//!
//! This module holds the fixed set of text transformations applied to each
//! file: removal of auth-related named imports, removal of leading guard
//! blocks from exported async functions, and blank-line cleanup.

pub mod auth;

pub use auth::{collapse_blank_lines, strip_auth, strip_auth_imports, strip_guard_blocks};
