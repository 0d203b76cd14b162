//! Error types for annotation lookups.

use std::fmt;

use thiserror::Error;

/// Why an annotation document could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The service answered with a non-success status.
    Status(u16),
    /// The request did not complete within the configured timeout.
    Timeout,
    /// Connection or protocol failure.
    Transport(String),
    /// The response body was not a JSON document.
    InvalidBody(String),
    /// No accession was given.
    EmptyAccession,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Timeout => f.write_str("request timed out"),
            Self::Transport(message) => write!(f, "transport error: {message}"),
            Self::InvalidBody(message) => write!(f, "invalid response body: {message}"),
            Self::EmptyAccession => f.write_str("empty accession"),
        }
    }
}

/// Errors that can occur while looking up an accession.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnnotationError {
    /// No document is available for the accession.
    #[error("no annotation data for {accession}: {reason}")]
    NotFound {
        accession: String,
        reason: NotFoundReason,
    },

    /// The HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl AnnotationError {
    pub fn not_found(accession: impl Into<String>, reason: NotFoundReason) -> Self {
        Self::NotFound {
            accession: accession.into(),
            reason,
        }
    }

    /// Returns a user-friendly message suitable for a warning line.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::NotFound { .. } => "No data found for the given Uniprot Accession ID.",
            Self::Client(_) => "Could not prepare the annotation service client.",
        }
    }
}

/// Result type alias for annotation operations.
pub type Result<T> = std::result::Result<T, AnnotationError>;
