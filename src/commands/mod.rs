//! CLI command implementations.
//!
//! One submodule per command, each with a config struct built by `main` from
//! parsed arguments and a `handle_*` entry point that runs the command.

pub mod strip;

pub use strip::{handle_strip, process_file, StripConfig};
