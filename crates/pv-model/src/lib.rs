//! ProteinVista data model.
//!
//! Shared types for the two visualization pipelines:
//!
//! - **Genome view**: [`FeatureRecord`] rows collected into a [`FeatureTable`]
//! - **Protein features**: [`AnnotationFeature`] rows plus a [`ProteinSummary`]
//! - **Selection**: the static [`LookupEntry`] catalog type and its search
//! - **Tools**: the landing listing in [`tool_registry`]

pub mod annotation;
pub mod error;
pub mod feature;
pub mod frame;
pub mod lookup;
pub mod tools;

pub use annotation::{AnnotationFeature, AnnotationTable, NOT_AVAILABLE, ProteinSummary};
pub use error::{ModelError, Result};
pub use feature::{FeatureKind, FeatureRecord, FeatureTable, TableRow};
pub use frame::{ANNOTATION_COLUMNS, FEATURE_COLUMNS, write_csv};
pub use lookup::{LookupEntry, search};
pub use tools::{ToolInfo, tool_registry};
