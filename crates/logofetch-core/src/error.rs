//! Fatal run errors. Every variant ends the run with exit status 1.

use crate::http::FetchError;
use crate::schema::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fetch CSV {url}: {source}")]
    FetchCsv {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Could not read CSV headers")]
    MissingHeader,

    #[error("Could not read CSV headers: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not find expected columns.")]
    UnresolvedColumns { headers: Vec<String> },
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Lines written to stderr when the run aborts.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            RunError::MissingHeader | RunError::Csv(_) => vec![self.to_string()],
            RunError::UnresolvedColumns { headers } => {
                vec![self.to_string(), format!("Headers: {:?}", headers)]
            }
            RunError::CreateOutputDir { .. } | RunError::FetchCsv { .. } => {
                vec![format!("logofetch error: {}", self)]
            }
        }
    }
}

impl From<SchemaError> for RunError {
    fn from(e: SchemaError) -> Self {
        match e {
            SchemaError::MissingHeader => RunError::MissingHeader,
            SchemaError::UnresolvedColumns { headers } => RunError::UnresolvedColumns { headers },
        }
    }
}
