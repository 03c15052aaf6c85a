//! Generate command: fetch, merge, reconcile, write.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::corpus;
use crate::fetcher::Fetcher;
use crate::output::write_result;
use crate::reconcile::reconcile;
use crate::utils::format_count;

/// Run the full aggregation pipeline.
///
/// Best-effort by design: failed sources and unreadable corpus files are
/// logged and skipped, and even a failed final write only logs an error.
/// The run always completes.
pub async fn run(offline: bool, output: Option<PathBuf>, config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let output_path = output.unwrap_or_else(|| config.output.clone());

    if offline {
        info!("offline mode, skipping fetch");
    } else {
        fetch_sources(&config).await?;
    }

    let include = corpus::load_dir(&config.include_dir)?;
    let exclude = corpus::load_dir(&config.exclude_dir)?;
    info!(
        "loaded {} include records, {} exclude records",
        format_count(include.len()),
        format_count(exclude.len())
    );

    let result = reconcile(&include, &exclude);
    if result.is_empty() {
        warn!("result set is empty, writing an empty output file");
    }

    match write_result(&result, &output_path) {
        Ok(()) => info!(
            "wrote {} records to {:?}",
            format_count(result.len()),
            output_path
        ),
        // The run still counts as complete; the loss is visible in the log.
        Err(e) => error!("failed to write result file: {:#}", e),
    }

    Ok(())
}

/// Fan out over every configured source and wait for all of them.
async fn fetch_sources(config: &Config) -> Result<()> {
    let fetcher = Fetcher::new()?;
    let results = fetcher
        .fetch_all(&config.sources, &config.include_dir)
        .await?;

    let fetched = results.iter().filter(|r| r.is_ok()).count();
    let failed = results.len() - fetched;
    if failed > 0 {
        warn!("{} of {} sources unavailable this run", failed, results.len());
    }
    info!("fetched {}/{} sources", fetched, results.len());

    Ok(())
}
