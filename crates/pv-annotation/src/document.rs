//! Projection of an EBI Proteins API document onto the annotation model.
//!
//! The document is kept as raw JSON. Only a handful of paths are read, each
//! through a single JSON-pointer lookup that falls back to a default, so a
//! missing object, key or array element never fails the projection.

use serde_json::Value;

use pv_model::{AnnotationFeature, AnnotationTable, NOT_AVAILABLE, ProteinSummary};

const PROTEIN_NAME_PATH: &str = "/protein/recommendedName/fullName/value";
const ORGANISM_PATH: &str = "/organism/scientificName";
const SEQUENCE_LENGTH_PATH: &str = "/sequence/length";
const FUNCTION_PATH: &str = "/comments/0/text/0/value";

/// Annotation document returned for one accession.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinDocument(Value);

impl ProteinDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The four display fields, each [`NOT_AVAILABLE`] when absent.
    pub fn summary(&self) -> ProteinSummary {
        ProteinSummary {
            protein_name: self.text_at(PROTEIN_NAME_PATH),
            organism: self.text_at(ORGANISM_PATH),
            sequence_length: self.text_at(SEQUENCE_LENGTH_PATH),
            function: self.text_at(FUNCTION_PATH),
        }
    }

    /// Rows of the `features` array, in document order.
    ///
    /// Missing `type` becomes [`NOT_AVAILABLE`]; missing or unreadable
    /// `begin`/`end` become 0.
    pub fn features(&self) -> Vec<AnnotationFeature> {
        self.0
            .get("features")
            .and_then(Value::as_array)
            .map(|features| features.iter().map(project_feature).collect())
            .unwrap_or_default()
    }

    pub fn to_table(&self, accession: &str) -> AnnotationTable {
        AnnotationTable::new(accession, self.features())
    }

    fn text_at(&self, pointer: &str) -> String {
        self.0
            .pointer(pointer)
            .and_then(display_text)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

fn project_feature(feature: &Value) -> AnnotationFeature {
    AnnotationFeature {
        kind: feature
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        start: position(feature.get("begin")),
        end: position(feature.get("end")),
    }
}

/// Read a feature position; the API sends them as strings such as `"141"`
/// or `"<1"`, older payloads as numbers.
fn position(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .unwrap_or(0),
        Some(Value::String(text)) => text
            .trim()
            .trim_start_matches(['<', '>', '~'])
            .parse()
            .unwrap_or(0),
        _ => 0,
    }
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
