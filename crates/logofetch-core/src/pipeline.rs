//! The single pass: output dir → CSV → columns → rows → summary.

use crate::config::FetchConfig;
use crate::downloader::{self, RowOutcome};
use crate::error::RunError;
use crate::http::{self, HttpOptions};
use crate::report::{Reporter, RunSummary};
use crate::schema;
use crate::storage;
use crate::team::TeamRecord;
use std::io::Write;

/// Runs the whole pipeline once. Per-row failures are reported and counted;
/// only the fatal conditions of [`RunError`] abort.
pub fn run<O: Write, E: Write>(
    cfg: &FetchConfig,
    reporter: &mut Reporter<O, E>,
) -> Result<RunSummary, RunError> {
    storage::ensure_dir(&cfg.out_dir).map_err(|source| RunError::CreateOutputDir {
        path: cfg.out_dir.clone(),
        source,
    })?;

    let opts = HttpOptions::from(cfg);
    tracing::info!("fetching team CSV from {}", cfg.csv_url);
    let text = http::get_text(&cfg.csv_url, &opts).map_err(|source| RunError::FetchCsv {
        url: cfg.csv_url.clone(),
        source,
    })?;

    if !schema::has_header_line(&text) {
        return Err(RunError::MissingHeader);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    let columns = schema::resolve_columns(
        &headers,
        &cfg.abbr_candidates[..],
        &cfg.logo_candidates[..],
    )?;

    let mut summary = RunSummary::default();
    for (i, result) in rdr.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("skipping malformed row {}: {}", i + 1, e);
                reporter.failed(&format!("row {}", i + 1), &anyhow::Error::new(e));
                summary.failed += 1;
                continue;
            }
        };

        let Some(team) = TeamRecord::from_row(&row, &columns) else {
            summary.skipped += 1;
            continue;
        };

        match downloader::process_row(&team, &cfg.out_dir, &opts) {
            RowOutcome::Downloaded(path) => {
                reporter.saved(&team.abbreviation, &path);
                summary.downloaded += 1;
            }
            RowOutcome::Cached(_) => summary.cached += 1,
            RowOutcome::Failed(e) => {
                reporter.failed(&team.abbreviation, &e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "run complete: downloaded={} cached={} skipped={} failed={}",
        summary.downloaded,
        summary.cached,
        summary.skipped,
        summary.failed
    );
    reporter.done(&summary, &cfg.out_dir);
    Ok(summary)
}

/// Runs the pipeline and returns the process exit status: 0 when the row loop
/// completes (even with per-row failures), otherwise the fatal error's code
/// after writing its diagnostics to the error stream.
pub fn run_and_report<O: Write, E: Write>(cfg: &FetchConfig, reporter: &mut Reporter<O, E>) -> i32 {
    match run(cfg, reporter) {
        Ok(_) => 0,
        Err(e) => {
            tracing::error!("run aborted: {}", e);
            for line in e.diagnostics() {
                reporter.diagnostic(line);
            }
            e.exit_code()
        }
    }
}
