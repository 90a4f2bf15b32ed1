use crate::core::{RewriteOutcome, RunSummary, StripError};
use crate::io::{self, FileWalker};
use crate::patterns;
use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

pub struct StripConfig {
    pub path: PathBuf,
    pub extensions: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub dry_run: bool,
    pub verbosity: u8,
}

/// Runs the strip command: discover files, rewrite each one in place,
/// report per-file status and a final modified count.
///
/// A single file's failure is printed and counted but never aborts the run,
/// and the command still exits successfully afterwards.
pub fn handle_strip(config: StripConfig) -> Result<()> {
    let files = FileWalker::new(config.path.clone())
        .with_extensions(config.extensions.clone())
        .with_ignore_patterns(config.ignore_patterns.clone())
        .walk()?;

    println!("Found {} matching files in {}", files.len(), config.path.display());

    let summary = strip_files(&files, config.dry_run, config.verbosity);

    println!("\nModified {} files", summary.files_modified);
    Ok(())
}

/// Processes files strictly one at a time, in traversal order, accumulating
/// the run counters.
fn strip_files(files: &[PathBuf], dry_run: bool, verbosity: u8) -> RunSummary {
    let mut summary = RunSummary {
        files_found: files.len(),
        ..Default::default()
    };

    for file in files {
        match process_file(file, dry_run) {
            Ok(RewriteOutcome::Modified) => {
                summary.files_modified += 1;
                report_modified(file, dry_run);
            }
            Ok(RewriteOutcome::Unchanged) => {
                // Indistinguishable from "already clean"; silent by default.
                if verbosity > 0 {
                    println!("  unchanged {}", file.display());
                }
            }
            Err(e) => {
                summary.files_failed += 1;
                report_failure(&e);
            }
        }
    }

    summary
}

/// Reads one file, applies the rewrite pipeline, and overwrites the file
/// only if the content changed. The write is all-or-nothing: the whole new
/// content goes out in one operation.
pub fn process_file(path: &Path, dry_run: bool) -> Result<RewriteOutcome, StripError> {
    let original = io::read_file(path)?;
    let rewritten = patterns::strip_auth(&original);

    if rewritten == original {
        return Ok(RewriteOutcome::Unchanged);
    }

    if !dry_run {
        io::write_file(path, &rewritten)?;
    }
    log::debug!("rewrote {}", path.display());
    Ok(RewriteOutcome::Modified)
}

fn report_modified(path: &Path, dry_run: bool) {
    if dry_run {
        println!("{} Would remove auth from {}", "✓".green(), path.display());
    } else {
        println!("{} Removed auth from {}", "✓".green(), path.display());
    }
}

fn report_failure(error: &StripError) {
    eprintln!(
        "{} Error processing {}: {}",
        "✗".red(),
        error.path().display(),
        error
    );
}
