use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "authstrip")]
#[command(about = "Strip authentication imports and guard blocks from TypeScript sources", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove auth imports and leading guard blocks in place
    Strip {
        /// Root directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// File extensions to rewrite
        #[arg(long, value_delimiter = ',', default_value = "ts")]
        extensions: Vec<String>,

        /// Glob patterns to exclude from the scan
        #[arg(long = "ignore")]
        ignore_patterns: Vec<String>,

        /// Report what would change without writing any file
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Increase verbosity (list unchanged files)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}
