//! Structure file ingestion for the genome view.
//!
//! # Features
//!
//! - **PDB Parsing**: `pdbtbx`-backed reader grouping first-model atoms into chains and residues
//! - **Scoped Uploads**: uploaded bytes staged to a unique temp file, removed on
//!   every exit path
//! - **Feature Extraction**: chain/residue layout reshaped into a [`FeatureTable`](pv_model::FeatureTable)
//! - **Group Selection**: narrowing a table to one chromosome/segment label
//!
//! # Example
//!
//! ```ignore
//! use pv_structure::{ExtractOptions, StructureExtractor, select_group};
//!
//! let bytes = std::fs::read("1crn.pdb")?;
//! let extraction = StructureExtractor::new(ExtractOptions::default()).extract_upload(&bytes)?;
//! let selection = select_group(&extraction.table, Some("A"));
//! ```

mod error;
mod extract;
mod pdb;
mod upload;

// === Error Types ===
pub use error::{ParseError, Result, StructureError};

// === Parsing ===
pub use pdb::{Chain, DEFAULT_CHAIN, PdbParser, Residue, Structure, StructureParser};

// === Uploads ===
pub use upload::ScopedUpload;

// === Extraction & Selection ===
pub use extract::{
    DEFAULT_FEATURES_PER_GROUP, ExtractOptions, Extraction, GenomeLayout, GroupSelection,
    StructureExtractor, build_table, select_group,
};
