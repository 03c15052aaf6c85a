//! Configuration management for hostmerge.
//!
//! The source URL list is explicit configuration rather than compiled-in
//! state, so tests and deployments can substitute sources without touching
//! the pipeline.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote block-list sources (the "include" group). HTTPS only.
    pub sources: Vec<String>,

    /// Directory holding the include corpus (fetched lists land here,
    /// locally supplied include files are read from here too).
    pub include_dir: PathBuf,

    /// Directory holding the locally curated exclusion corpus.
    pub exclude_dir: PathBuf,

    /// Path of the merged output file, overwritten on each run.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            include_dir: PathBuf::from("include"),
            exclude_dir: PathBuf::from("exclude"),
            output: PathBuf::from("result.txt"),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for url in &self.sources {
            if !url.starts_with("https://") {
                anyhow::bail!("Source URL must use HTTPS: {}", url);
            }
        }

        if self.include_dir == self.exclude_dir {
            anyhow::bail!(
                "include_dir and exclude_dir must differ: {:?}",
                self.include_dir
            );
        }

        Ok(())
    }
}

/// Default remote block-list sources.
fn default_sources() -> Vec<String> {
    [
        "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts",
        "https://www.github.developerdan.com/hosts/lists/ads-and-tracking-extended.txt",
        "https://v.firebog.net/hosts/AdguardDNS.txt",
        "https://s3.amazonaws.com/lists.disconnect.me/simple_tracking.txt",
        "https://s3.amazonaws.com/lists.disconnect.me/simple_ad.txt",
        "https://raw.githubusercontent.com/crazy-max/WindowsSpyBlocker/master/data/hosts/spy.txt",
        "https://winhelp2002.mvps.org/hosts.txt",
        "https://sysctl.org/cameleon/hosts",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_http_source() {
        let config = Config {
            sources: vec!["http://insecure.example/hosts".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_shared_corpus_dir() {
        let config = Config {
            include_dir: PathBuf::from("corpus"),
            exclude_dir: PathBuf::from("corpus"),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.sources.len(), 8);
    }

    #[test]
    fn test_load_partial_yaml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "sources:\n  - https://lists.example.org/hosts.txt\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.sources, vec!["https://lists.example.org/hosts.txt"]);
        assert_eq!(config.output, PathBuf::from("result.txt"));
    }
}
