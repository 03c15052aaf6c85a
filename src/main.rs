//! hostmerge - Hosts blocklist aggregator
//!
//! Merges remote denylists into one deduplicated, normalized hosts file,
//! minus a locally curated exclusion set.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hostmerge::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate { offline, output } => {
            hostmerge::commands::generate::run(offline, output, &cli.config).await
        }
        Commands::Sources => hostmerge::commands::sources::run(&cli.config).await,
        Commands::Version => {
            println!("hostmerge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
