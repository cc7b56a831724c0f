use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("row count must be positive, got {0}")]
    InvalidRowCount(i64),

    #[error("dataset file {} not found — run `dataset-gen` to create it first", path.display())]
    MissingData { path: PathBuf },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;
