//! Error types for the ProteinVista data model.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a record or table violates the model invariants.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Feature span runs backwards.
    #[error("invalid span {start}..{end}: start must not exceed end")]
    InvalidSpan { start: i64, end: i64 },

    /// Feature has no group label.
    #[error("feature group must not be empty")]
    EmptyGroup,

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Failed to write a table export.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<polars::prelude::PolarsError> for ModelError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
