//! User-facing progress lines on stdout/stderr.
//!
//! Separate from `tracing`: these lines are the program's output, the log is diagnostics.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Totals for one run. Only `downloaded` is printed; the rest go to the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Logos fetched and written this run.
    pub downloaded: usize,
    /// Rows whose target file already existed with non-zero size.
    pub cached: usize,
    /// Rows with an empty abbreviation or logo URL.
    pub skipped: usize,
    /// Rows whose download or write failed (and malformed rows).
    pub failed: usize,
}

/// Owns the output and error streams. Write errors on either stream are ignored.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter on the process's stdout/stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn saved(&mut self, abbr: &str, path: &Path) {
        let _ = writeln!(self.out, "saved {} -> {}", abbr, path.display());
    }

    /// `error` is printed with its context chain.
    pub fn failed(&mut self, label: &str, error: &anyhow::Error) {
        let _ = writeln!(self.err, "FAILED {}: {:#}", label, error);
    }

    pub fn done(&mut self, summary: &RunSummary, out_dir: &Path) {
        let _ = writeln!(
            self.out,
            "done. downloaded {} logos into {}",
            summary.downloaded,
            out_dir.display()
        );
        let _ = self.out.flush();
    }

    /// One diagnostic line on the error stream.
    pub fn diagnostic(&mut self, line: impl Display) {
        let _ = writeln!(self.err, "{}", line);
        let _ = self.err.flush();
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn lines(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn saved_and_done_go_to_stdout() {
        let mut r = Reporter::new(Vec::new(), Vec::new());
        r.saved("SEA", Path::new("public/images/nfl/teams/SEA.png"));
        let summary = RunSummary {
            downloaded: 1,
            ..RunSummary::default()
        };
        r.done(&summary, Path::new("public/images/nfl/teams"));
        let (out, err) = r.into_inner();
        assert_eq!(
            lines(out),
            "saved SEA -> public/images/nfl/teams/SEA.png\n\
             done. downloaded 1 logos into public/images/nfl/teams\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn failure_goes_to_stderr_with_context_chain() {
        let mut r = Reporter::new(Vec::new(), Vec::new());
        let e = Err::<(), _>(anyhow::anyhow!("HTTP 404"))
            .context("download http://x/kc.png")
            .unwrap_err();
        r.failed("KC", &e);
        let (out, err) = r.into_inner();
        assert!(out.is_empty());
        assert_eq!(lines(err), "FAILED KC: download http://x/kc.png: HTTP 404\n");
    }
}
