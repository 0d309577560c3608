use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardioError>;

#[derive(Debug, Error)]
pub enum CardioError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV decoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}, column {column}: '{value}' is not a valid number")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("row {row}: expected at least {expected} columns, got {found}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("invalid network topology: {0}")]
    Topology(String),

    #[error("chart window failed: {0}")]
    Display(String),
}

impl CardioError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CardioError::Io { path: path.into(), source }
    }
}
