//! # hostmerge - Hosts Blocklist Aggregator
//!
//! Merges multiple remotely hosted block-lists (hosts-format denylist
//! files) into a single deduplicated, normalized output file, while a
//! locally curated exclusion corpus vetoes entries.
//!
//! ## Pipeline
//!
//! ```text
//! sources (HTTPS) ──> Fetcher ──> include/*.txt ─┐
//!                                                ├─> corpus::load_dir ──┐
//!                                 exclude/*.txt ─┘                      │
//!                                                                       v
//!                                   result.txt <── output <── reconcile
//! ```
//!
//! Every raw line passes through [`canonical::canonicalize`], which
//! collapses the heterogeneous hosts-list syntax into `"<address> <host>"`
//! records compared by exact string equality. Corpus loading dedups and
//! orders the records; reconciliation subtracts the exclude set from the
//! include set.
//!
//! ## Example Usage
//!
//! ```no_run
//! use hostmerge::config::Config;
//! use hostmerge::fetcher::Fetcher;
//! use hostmerge::output::write_result;
//! use hostmerge::reconcile::reconcile;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("hostmerge.yaml")?;
//!
//!     let fetcher = Fetcher::new()?;
//!     fetcher.fetch_all(&config.sources, &config.include_dir).await?;
//!
//!     let include = hostmerge::corpus::load_dir(&config.include_dir)?;
//!     let exclude = hostmerge::corpus::load_dir(&config.exclude_dir)?;
//!     let result = reconcile(&include, &exclude);
//!
//!     write_result(&result, &config.output)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`canonical`] - Line canonicalization (raw line -> canonical record)
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`corpus`] - Corpus loading with dedup and ordering
//! - [`error`] - Per-source error taxonomy
//! - [`fetcher`] - HTTP client for downloading block-lists
//! - [`output`] - Atomic result file persistence
//! - [`reconcile`] - Include-minus-exclude set reconciliation
//! - [`utils`] - Common utility functions

pub mod canonical;
pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fetcher;
pub mod output;
pub mod reconcile;
pub mod utils;

pub use cli::{Cli, Commands};
pub use config::Config;
