use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid region code: {0:?}")]
    InvalidRegion(String),
    #[error("default region is required for numbers without a leading '+'")]
    MissingRegion,
}
