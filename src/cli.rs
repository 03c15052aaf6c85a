//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hostmerge")]
#[command(author, version, about = "Hosts blocklist aggregator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "hostmerge.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (for cron/systemd timer)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch sources, merge corpora, and write the result file
    Generate {
        /// Skip fetching; merge whatever the include directory already holds
        #[arg(long)]
        offline: bool,

        /// Override the configured output path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List configured block-list sources
    Sources,

    /// Show version
    Version,
}
