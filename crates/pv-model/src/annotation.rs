//! Protein annotation rows and display fields.

use serde::{Deserialize, Serialize};

/// Sentinel shown for any display field the annotation document lacks.
pub const NOT_AVAILABLE: &str = "N/A";

/// One feature of a protein annotation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationFeature {
    pub kind: String,
    pub start: i64,
    pub end: i64,
}

/// Ordered feature rows of one protein, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationTable {
    pub accession: String,
    pub features: Vec<AnnotationFeature>,
}

impl AnnotationTable {
    pub fn new(accession: impl Into<String>, features: Vec<AnnotationFeature>) -> Self {
        Self {
            accession: accession.into(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Scalar fields read once from an annotation document for display.
///
/// Every field falls back to [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinSummary {
    pub protein_name: String,
    pub organism: String,
    pub sequence_length: String,
    pub function: String,
}

impl Default for ProteinSummary {
    fn default() -> Self {
        Self {
            protein_name: NOT_AVAILABLE.to_string(),
            organism: NOT_AVAILABLE.to_string(),
            sequence_length: NOT_AVAILABLE.to_string(),
            function: NOT_AVAILABLE.to_string(),
        }
    }
}
