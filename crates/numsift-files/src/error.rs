use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file format: {0} (expected .txt or .csv)")]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, FilesError>;
