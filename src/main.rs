use anyhow::Result;
use authstrip::cli::{Cli, Commands};
use authstrip::commands::strip::{handle_strip, StripConfig};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Strip {
            path,
            extensions,
            ignore_patterns,
            dry_run,
            verbosity,
        } => handle_strip(StripConfig {
            path,
            extensions,
            ignore_patterns,
            dry_run,
            verbosity,
        }),
    }
}
