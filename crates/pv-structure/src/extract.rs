//! Structure-to-table extraction for the genome view.
//!
//! The feature layout is placeholder data: rows are derived from the chain
//! and residue layout of the structure, not from any genomic annotation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use pv_model::{FeatureKind, FeatureRecord, FeatureTable};

use crate::error::Result;
use crate::pdb::{PdbParser, Residue, Structure, StructureParser};
use crate::upload::ScopedUpload;

/// Default number of features generated per chain.
pub const DEFAULT_FEATURES_PER_GROUP: usize = 3;

/// How rows are generated from a parsed structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenomeLayout {
    /// Rows derived from the chains and residue numbering of the structure.
    #[default]
    Structure,
    /// The fixed nine-row demo table over groups `1`, `2` and `3`.
    Demo,
}

impl fmt::Display for GenomeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Structure => "structure",
            Self::Demo => "demo",
        })
    }
}

/// Options for [`StructureExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub layout: GenomeLayout,
    pub features_per_group: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            layout: GenomeLayout::default(),
            features_per_group: DEFAULT_FEATURES_PER_GROUP,
        }
    }
}

/// A parsed structure and the feature table built from it.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub structure: Structure,
    pub table: FeatureTable,
}

/// Upload-to-table pipeline over a pluggable structure parser.
#[derive(Debug, Clone, Default)]
pub struct StructureExtractor<P = PdbParser> {
    parser: P,
    options: ExtractOptions,
}

impl StructureExtractor<PdbParser> {
    pub fn new(options: ExtractOptions) -> Self {
        Self::with_parser(PdbParser, options)
    }
}

impl<P: StructureParser> StructureExtractor<P> {
    pub fn with_parser(parser: P, options: ExtractOptions) -> Self {
        Self { parser, options }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Stage `bytes` to a scoped temp file, parse it, and build the table.
    ///
    /// The temp file is gone when this returns, whatever the outcome.
    pub fn extract_upload(&self, bytes: &[u8]) -> Result<Extraction> {
        let upload = ScopedUpload::create(bytes)?;
        let parsed = self.parser.parse_path(upload.path());
        upload.close();
        let structure = parsed?;
        let table = build_table(&structure, self.options)?;
        info!(
            layout = %self.options.layout,
            groups = table.groups().len(),
            records = table.len(),
            "extracted feature table"
        );
        Ok(Extraction { structure, table })
    }
}

/// Build the feature table for an already parsed structure.
pub fn build_table(structure: &Structure, options: ExtractOptions) -> Result<FeatureTable> {
    match options.layout {
        GenomeLayout::Structure => structure_table(structure, options.features_per_group),
        GenomeLayout::Demo => demo_table(),
    }
}

fn structure_table(structure: &Structure, per_group: usize) -> Result<FeatureTable> {
    let mut table = FeatureTable::new();
    let mut row = 0usize;
    for chain in &structure.chains {
        for block in residue_blocks(&chain.residues, per_group) {
            let (Some(first), Some(last)) = (block.first(), block.last()) else {
                continue;
            };
            let start = first.number.min(last.number);
            let end = first.number.max(last.number);
            table.push(FeatureRecord::new(
                chain.id.as_str(),
                start,
                end,
                gene_label(row),
                FeatureKind::cyclic(row),
                format!("Domain{}", row + 1),
            )?);
            row += 1;
        }
        debug!(chain = %chain.id, residues = chain.residues.len(), "chain split into features");
    }
    Ok(table)
}

/// Split residues into at most `parts` contiguous, near-equal blocks.
fn residue_blocks(residues: &[Residue], parts: usize) -> Vec<&[Residue]> {
    let count = residues.len();
    let parts = parts.max(1).min(count);
    (0..parts)
        .map(|part| &residues[part * count / parts..(part + 1) * count / parts])
        .collect()
}

/// `GeneA`, `GeneB`, ... `GeneZ`, `GeneAA`, ...
fn gene_label(row: usize) -> String {
    let mut letters = Vec::new();
    let mut n = row + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.reverse();
    format!("Gene{}", letters.into_iter().collect::<String>())
}

const DEMO_ROWS: [(&str, i64, i64); 9] = [
    ("1", 100, 200),
    ("1", 150, 250),
    ("1", 300, 400),
    ("2", 100, 200),
    ("2", 200, 300),
    ("2", 400, 500),
    ("3", 100, 200),
    ("3", 150, 250),
    ("3", 300, 400),
];

fn demo_table() -> Result<FeatureTable> {
    let mut table = FeatureTable::new();
    for (row, (group, start, end)) in DEMO_ROWS.iter().enumerate() {
        table.push(FeatureRecord::new(
            *group,
            *start,
            *end,
            gene_label(row),
            FeatureKind::cyclic(row),
            format!("Domain{}", row + 1),
        )?);
    }
    Ok(table)
}

/// A table narrowed to one group.
#[derive(Debug, Clone)]
pub struct GroupSelection {
    /// The group actually selected; `None` only when the table had no rows.
    pub group: Option<String>,
    pub table: FeatureTable,
}

impl GroupSelection {
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Narrow `table` to `requested`, or to its first group when none is given.
pub fn select_group(table: &FeatureTable, requested: Option<&str>) -> GroupSelection {
    let group = requested
        .map(str::to_string)
        .or_else(|| table.groups().first().map(|group| (*group).to_string()));
    let filtered = match &group {
        Some(group) => table.filter_group(group),
        None => FeatureTable::new(),
    };
    debug!(group = group.as_deref().unwrap_or("-"), rows = filtered.len(), "selected group");
    GroupSelection {
        group,
        table: filtered,
    }
}
