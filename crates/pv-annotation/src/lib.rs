//! Protein annotation lookup for the feature plot.
//!
//! An accession is picked from the static [`catalog`], its document is
//! fetched through an [`AnnotationSource`] (the EBI Proteins API by default)
//! and projected onto an [`AnnotationTable`] plus a [`ProteinSummary`].

mod catalog;
mod client;
mod document;
mod error;

use tracing::{info, warn};

use pv_model::{AnnotationTable, ProteinSummary};

// === Error Types ===
pub use error::{AnnotationError, NotFoundReason, Result};

// === Catalog & Selection ===
pub use catalog::{
    CatalogSelection, NO_RESULTS_MESSAGE, catalog, search_catalog, select_accession,
};

// === Remote Source ===
pub use client::{
    AnnotationSource, ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, EbiProteinsClient,
    check_status,
};

// === Document Projection ===
pub use document::ProteinDocument;

/// Display fields and feature rows extracted for one accession.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub accession: String,
    pub summary: ProteinSummary,
    pub table: AnnotationTable,
}

/// Fetch `accession` from `source` and project it onto the annotation model.
///
/// A blank accession is reported as `NotFound` without contacting the source.
pub fn fetch_annotation<S>(source: &S, accession: &str) -> Result<Annotation>
where
    S: AnnotationSource + ?Sized,
{
    let accession = accession.trim();
    if accession.is_empty() {
        return Err(AnnotationError::not_found(
            accession,
            NotFoundReason::EmptyAccession,
        ));
    }
    let document = source.fetch(accession).inspect_err(|error| {
        warn!(accession, %error, "annotation lookup failed");
    })?;
    let summary = document.summary();
    let table = document.to_table(accession);
    info!(accession, features = table.len(), "extracted annotation features");
    Ok(Annotation {
        accession: accession.to_string(),
        summary,
        table,
    })
}
