use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderCompareError {
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Malformed record in {}: {reason}", path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("Failed to read file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] csv::Error),

    #[error("Failed to write report: {}", path.display())]
    ReportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HeaderCompareError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
