//! Error types for figure output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The figure could not be serialized.
    #[error("failed to serialize figure: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The HTML page could not be assembled.
    #[error("failed to format page: {0}")]
    Format(#[from] std::fmt::Error),

    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
