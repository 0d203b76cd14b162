//! Error types for structure ingestion.

use std::path::PathBuf;
use thiserror::Error;

use pv_model::ModelError;

/// The structure file is not a well-formed PDB file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The staged file path cannot be handed to the reader.
    #[error("structure file path {} is not valid UTF-8", path.display())]
    NonUtf8Path { path: PathBuf },

    /// The reader rejected the file; `reason` is the first error reported.
    #[error("invalid PDB file: {reason} ({errors} error(s))")]
    Invalid { reason: String, errors: usize },

    /// The first model holds no atoms.
    #[error("structure file contains no atom records")]
    NoAtoms,
}

/// Errors that can occur while turning an upload into a feature table.
#[derive(Debug, Error)]
pub enum StructureError {
    /// The upload could not be persisted to its temporary location.
    #[error("failed to stage upload: {source}")]
    Upload {
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A generated record broke a table invariant.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl StructureError {
    /// Short message suitable for showing inline to the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Upload { .. } => "Could not store the uploaded file. Please try again.",
            Self::Parse(_) => "The uploaded file is not a valid PDB file.",
            Self::Model(_) => "The structure produced an invalid feature table.",
        }
    }
}

/// Result type for structure operations.
pub type Result<T> = std::result::Result<T, StructureError>;
