//! Result file persistence.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write the merged record set to `path`, one record per line with a
/// trailing newline, replacing any previous output.
///
/// Uses the tempfile + rename pattern so a crash mid-write never leaves a
/// truncated result behind.
pub fn write_result(records: &[String], path: &Path) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {dir:?}"))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent.unwrap_or(Path::new(".")))
        .context("Failed to create temporary file for result")?;

    for record in records {
        writeln!(temp_file, "{record}")?;
    }
    temp_file.as_file().sync_all()?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist result file: {path:?}"))?;

    Ok(())
}
