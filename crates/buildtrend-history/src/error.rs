//! Error types for history queries

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("no previous analysis result available")]
    NoPreviousResult,
}

/// Result type for history queries
pub type Result<T> = std::result::Result<T, HistoryError>;
