//! Corpus loading: turn a group of raw text blobs into one canonical set.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::canonical::canonicalize;

/// File extension eligible for corpus input.
const CORPUS_EXT: &str = "txt";

/// Canonicalize and pool every line of every blob into one deduplicated,
/// lexicographically ordered set.
///
/// Blob order does not affect the result; the set is the commutative merge
/// of all non-discarded records.
pub fn collect_records<I, S>(blobs: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = (S, String)>,
    S: AsRef<str>,
{
    let mut records = BTreeSet::new();
    for (source, text) in blobs {
        let before = records.len();
        records.extend(text.lines().filter_map(canonicalize));
        debug!(
            "{}: {} new records",
            source.as_ref(),
            records.len() - before
        );
    }
    records
}

/// Load every `*.txt` file in `dir` into one canonical set.
///
/// A file that cannot be read is logged and skipped; the load never aborts
/// because of one bad file. A missing directory yields the empty set.
pub fn load_dir(dir: &Path) -> Result<BTreeSet<String>> {
    if !dir.exists() {
        debug!("corpus directory {:?} does not exist, treating as empty", dir);
        return Ok(BTreeSet::new());
    }

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list corpus directory: {dir:?}"))?;

    let mut blobs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable directory entry in {:?}: {}", dir, e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(CORPUS_EXT) {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(text) => blobs.push((path.display().to_string(), text)),
            Err(e) => warn!("skipping unreadable corpus file {:?}: {}", path, e),
        }
    }

    Ok(collect_records(blobs))
}
