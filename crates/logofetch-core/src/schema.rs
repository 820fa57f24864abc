//! CSV header inspection and column resolution.
//!
//! Each logical field has an ordered list of acceptable header names; the
//! first name present in the header wins, regardless of where the column sits.

use csv::StringRecord;

/// Header indices for the two fields the pipeline needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub abbr: usize,
    pub logo: usize,
}

/// Why the header could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// No header row at all (empty input).
    MissingHeader,
    /// At least one field matched none of its candidates.
    UnresolvedColumns { headers: Vec<String> },
}

/// True if the first line of `text` is non-empty. The csv reader skips blank
/// lines, so a blank first line must be caught here or the next line would
/// be taken as the header.
pub fn has_header_line(text: &str) -> bool {
    text.split('\n')
        .next()
        .map(|line| !line.trim_end_matches('\r').is_empty())
        .unwrap_or(false)
}

/// Index of the first candidate present in `headers`, in candidate order.
/// If a header name repeats, its first occurrence is used.
pub fn pick<S: AsRef<str>>(headers: &StringRecord, candidates: &[S]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|c| headers.iter().position(|h| h == c.as_ref()))
}

/// Resolves abbreviation and logo columns from the header record.
pub fn resolve_columns<S: AsRef<str>>(
    headers: &StringRecord,
    abbr_candidates: &[S],
    logo_candidates: &[S],
) -> Result<ColumnMap, SchemaError> {
    if headers.is_empty() {
        return Err(SchemaError::MissingHeader);
    }

    match (pick(headers, abbr_candidates), pick(headers, logo_candidates)) {
        (Some(abbr), Some(logo)) => {
            tracing::debug!(
                "resolved columns: abbr={:?} logo={:?}",
                &headers[abbr],
                &headers[logo]
            );
            Ok(ColumnMap { abbr, logo })
        }
        _ => Err(SchemaError::UnresolvedColumns {
            headers: headers.iter().map(str::to_string).collect(),
        }),
    }
}
