//! CLI for logofetch.
//!
//! The run is fully determined by built-in constants; the parser exists for
//! `--help` and `--version` only.

use clap::Parser;
use logofetch_core::pipeline;
use logofetch_core::{FetchConfig, Reporter};

/// Download NFL team logos listed in the nflverse team CSV into
/// `public/images/nfl/teams`, skipping logos already on disk.
#[derive(Debug, Parser)]
#[command(name = "logofetch", version)]
#[command(about = "Fetch NFL team logos into public/images/nfl/teams", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Runs the pipeline with the built-in configuration; returns the exit status.
    pub fn run(&self) -> i32 {
        let cfg = FetchConfig::default();
        match cfg.to_toml() {
            Ok(toml) => tracing::debug!("effective config:\n{}", toml),
            Err(e) => tracing::debug!("effective config: {:?} ({:#})", cfg, e),
        }

        let mut reporter = Reporter::stdio();
        pipeline::run_and_report(&cfg, &mut reporter)
    }
}
