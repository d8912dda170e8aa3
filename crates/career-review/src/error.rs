//! Error types for the review dashboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// The review service could not be reached or answered with an error.
    #[error("review service error: {0}")]
    Backend(String),

    #[error("unknown application status '{0}'")]
    UnknownStatus(String),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
