//! CLI argument parsing module for check-deps

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Report outdated, replaced and stale Go modules
#[derive(Parser, Debug, Clone)]
#[command(
    name = "check-deps",
    version,
    about = "Report outdated, replaced and stale Go modules"
)]
pub struct CliArgs {
    /// Directory of the Go module to check (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Check options
    /// Check for modules without updates for the last 6 months
    #[arg(long)]
    pub old: bool,

    /// Check indirect modules
    #[arg(long)]
    pub indirect: bool,

    /// Comma separated list of module prefixes to ignore, entries are trimmed and empty ones skipped (can be specified multiple times)
    #[arg(
        short = 'i',
        long = "ignore",
        value_name = "PREFIXES",
        value_delimiter = ',',
        action = ArgAction::Append
    )]
    pub ignore: Vec<String>,

    // Output options
    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Ignored prefixes, trimmed, without empty entries
    pub fn ignored_prefixes(&self) -> Vec<String> {
        self.ignore
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }
}
