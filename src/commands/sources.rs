//! Sources command: list the configured block-list URLs.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    println!();
    println!("Configured sources ({} total):", config.sources.len());
    println!();
    for url in &config.sources {
        println!("  {url}");
    }
    println!();
    println!("Include corpus: {:?}", config.include_dir);
    println!("Exclude corpus: {:?}", config.exclude_dir);
    println!("Output file:    {:?}", config.output);

    Ok(())
}
