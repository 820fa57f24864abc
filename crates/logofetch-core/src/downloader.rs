//! Per-row logo download: cache check, GET, write.

use crate::http::{self, HttpOptions};
use crate::storage;
use crate::team::TeamRecord;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// What happened to one team row.
#[derive(Debug)]
pub enum RowOutcome {
    /// Fetched and written this run.
    Downloaded(PathBuf),
    /// Target already present with non-zero size; no request made.
    Cached(PathBuf),
    /// Download or write failed; the run continues.
    Failed(anyhow::Error),
}

/// Fetches `team`'s logo into `out_dir` unless a non-empty file is already there.
pub fn process_row(team: &TeamRecord, out_dir: &Path, opts: &HttpOptions) -> RowOutcome {
    let dest = out_dir.join(team.file_name());
    if storage::is_cached(&dest) {
        tracing::debug!("{} cached at {}", team.abbreviation, dest.display());
        return RowOutcome::Cached(dest);
    }

    match download_to(&team.logo_url, &dest, opts) {
        Ok(n) => {
            tracing::info!("{} <- {} ({} bytes)", team.abbreviation, team.logo_url, n);
            RowOutcome::Downloaded(dest)
        }
        Err(e) => {
            tracing::warn!("{} failed: {:#}", team.abbreviation, e);
            RowOutcome::Failed(e)
        }
    }
}

fn download_to(url: &str, dest: &Path, opts: &HttpOptions) -> Result<usize> {
    let bytes = http::get_bytes(url, opts).with_context(|| format!("download {}", url))?;
    storage::write_file(dest, &bytes)?;
    Ok(bytes.len())
}
