use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ReportError – every failure the report can hit
// ---------------------------------------------------------------------------

/// Errors raised while loading, rendering or summarising.
///
/// None of these are recovered from. A `Division` error is returned only
/// after the rest of the summary has been written.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read {}: {detail}", path.display())]
    Read { path: PathBuf, detail: String },

    #[error("schema error in {}: {detail}", path.display())]
    Schema { path: PathBuf, detail: String },

    #[error("growth factor for {dataset} needs at least 2 rows, found {rows}")]
    Division { dataset: String, rows: usize },

    #[error("failed to write {}: {detail}", path.display())]
    OutputWrite { path: PathBuf, detail: String },
}

pub type Result<T> = core::result::Result<T, ReportError>;

impl ReportError {
    pub(crate) fn schema(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        ReportError::Schema {
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        ReportError::Read {
            path: path.into(),
            detail: detail.into(),
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>, detail: impl ToString) -> Self {
        ReportError::OutputWrite {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}
