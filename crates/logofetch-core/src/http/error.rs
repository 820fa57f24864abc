//! Error type for a single HTTP GET.

use thiserror::Error;

/// Failure of one GET: transport-level (curl) or a non-2xx final status.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, bad URL, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Final response (after redirects) had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}
