//! HTTP fetcher for downloading block-list sources.
//!
//! Fan-out/fan-in: one future per source URL, no concurrency cap, joined
//! before canonicalization starts. Each fetched body lands in its own file
//! inside a per-run temporary directory, then non-empty artifacts are
//! promoted into the include directory. The temporary directory is removed
//! when the run ends regardless of outcome.

use anyhow::{Context, Result};
use regex::Regex;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;
use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::error::SourceError;
use crate::utils::format_count;

const TIMEOUT_SECS: u64 = 600;
const MAX_RETRIES: u32 = 3;

/// Maximum size per fetched list (10 MB). Popular hosts lists top out
/// around 5 MB, so this leaves margin without admitting runaway bodies.
const MAX_LIST_SIZE: usize = 10 * 1024 * 1024;

/// Characters not allowed in artifact filenames derived from URLs.
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9._-]+").unwrap());

/// A successfully fetched and stored source.
#[derive(Debug)]
pub struct FetchOutcome {
    pub url: String,
    /// Final location of the artifact inside the include directory.
    pub path: PathBuf,
    pub bytes: usize,
}

/// HTTP client for fetching block-lists.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a new fetcher with the run-wide timeout applied.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(format!("hostmerge/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch every source concurrently and promote non-empty artifacts
    /// into `include_dir`.
    ///
    /// Returns one result per source. A failed source is reported in its
    /// slot and never aborts the others; there is no cancellation path.
    pub async fn fetch_all(
        &self,
        sources: &[String],
        include_dir: &Path,
    ) -> Result<Vec<Result<FetchOutcome, SourceError>>> {
        let staging = TempDir::new().context("Failed to create staging directory")?;
        tokio::fs::create_dir_all(include_dir)
            .await
            .with_context(|| format!("Failed to create include directory: {include_dir:?}"))?;

        let results = futures::future::join_all(
            sources
                .iter()
                .map(|url| self.fetch_source(url, staging.path(), include_dir)),
        )
        .await;

        for result in &results {
            match result {
                Ok(outcome) => info!(
                    "fetched {} ({} bytes)",
                    outcome.url,
                    format_count(outcome.bytes)
                ),
                Err(e) => warn!("{}", e),
            }
        }

        // staging drops here, removing every leftover temporary artifact.
        Ok(results)
    }

    /// Fetch one source into the staging area and promote it.
    async fn fetch_source(
        &self,
        url: &str,
        staging: &Path,
        include_dir: &Path,
    ) -> Result<FetchOutcome, SourceError> {
        let body = self.fetch_with_retry(url).await?;

        if body.is_empty() {
            return Err(SourceError::EmptyArtifact {
                url: url.to_string(),
            });
        }

        let filename = artifact_filename(url);
        let temp_path = staging.join(&filename);
        let final_path = include_dir.join(&filename);

        let store = |reason: String| SourceError::Store {
            url: url.to_string(),
            reason,
        };

        tokio::fs::write(&temp_path, &body)
            .await
            .map_err(|e| store(e.to_string()))?;

        // rename can fail across filesystems, so copy + remove instead.
        tokio::fs::copy(&temp_path, &final_path)
            .await
            .map_err(|e| store(e.to_string()))?;
        tokio::fs::remove_file(&temp_path)
            .await
            .map_err(|e| store(e.to_string()))?;

        Ok(FetchOutcome {
            url: url.to_string(),
            path: final_path,
            bytes: body.len(),
        })
    }

    /// Fetch one URL with the fixed retry budget. Retries are immediate.
    async fn fetch_with_retry(&self, url: &str) -> Result<String, SourceError> {
        let mut last_error = String::from("unknown error");

        for attempt in 1..=MAX_RETRIES {
            debug!("attempt {}/{} for {}", attempt, MAX_RETRIES, url);
            match self.client.get(url).send().await {
                Ok(response) => {
                    if !response.status().is_success() {
                        last_error = format!("HTTP {}", response.status());
                        continue;
                    }
                    match response.text().await {
                        Ok(body) if body.len() > MAX_LIST_SIZE => {
                            return Err(SourceError::Fetch {
                                url: url.to_string(),
                                reason: format!(
                                    "body too large: {} bytes (max {})",
                                    body.len(),
                                    MAX_LIST_SIZE
                                ),
                            });
                        }
                        Ok(body) => return Ok(body),
                        Err(e) => last_error = e.to_string(),
                    }
                }
                Err(e) => last_error = e.to_string(),
            }
        }

        Err(SourceError::RetryExhausted {
            url: url.to_string(),
            attempts: MAX_RETRIES,
            last: last_error,
        })
    }
}

/// Derive a stable artifact filename from a source URL.
///
/// Strips the scheme and a leading `www.`, replaces unsafe character runs
/// with `-`, and ensures a `.txt` suffix so the corpus loader picks the
/// file up.
pub fn artifact_filename(url: &str) -> String {
    let mut name = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_end_matches('/')
        .to_string();
    name = UNSAFE_CHARS.replace_all(&name, "-").into_owned();
    if !name.ends_with(".txt") {
        name.push_str(".txt");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_filename_strips_scheme_and_www() {
        assert_eq!(
            artifact_filename("https://www.example.com/hosts"),
            "example.com-hosts.txt"
        );
    }

    #[test]
    fn test_artifact_filename_keeps_txt_suffix() {
        assert_eq!(
            artifact_filename("https://v.firebog.net/hosts/AdguardDNS.txt"),
            "v.firebog.net-hosts-AdguardDNS.txt"
        );
    }

    #[test]
    fn test_artifact_filename_sanitizes_unsafe_runs() {
        assert_eq!(
            artifact_filename("https://host.example/a?b=c&d"),
            "host.example-a-b-c-d.txt"
        );
    }

    #[test]
    fn test_artifact_filename_trailing_slash() {
        assert_eq!(artifact_filename("https://lists.example.org/"), "lists.example.org.txt");
    }
}
