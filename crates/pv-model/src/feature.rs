//! Genome-view feature records and tables.
//!
//! A [`FeatureTable`] is the fixed-shape table derived from an uploaded
//! structure file. Each row keeps the index it had when the table was first
//! built, so a table narrowed to one group still knows where its rows came
//! from. The genome view uses that index as the vertical lane.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Category of a genome-view feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Exon,
    Intron,
    Promoter,
    Other,
}

impl FeatureKind {
    /// Kinds handed out to consecutive rows.
    pub const CYCLE: [FeatureKind; 3] = [Self::Exon, Self::Intron, Self::Promoter];

    /// Kind assigned to the row at `position` by cycling through [`Self::CYCLE`].
    #[must_use]
    pub fn cyclic(position: usize) -> Self {
        Self::CYCLE[position % Self::CYCLE.len()]
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exon => "Exon",
            Self::Intron => "Intron",
            Self::Promoter => "Promoter",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the genome-view table.
///
/// Fields are private so the `start <= end` and non-empty group invariants
/// hold for every value that exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    group: String,
    start: i64,
    end: i64,
    label: String,
    kind: FeatureKind,
    extra: String,
}

impl FeatureRecord {
    /// Build a record, rejecting an empty group or a backwards span.
    pub fn new(
        group: impl Into<String>,
        start: i64,
        end: i64,
        label: impl Into<String>,
        kind: FeatureKind,
        extra: impl Into<String>,
    ) -> Result<Self> {
        let group = group.into();
        if group.trim().is_empty() {
            return Err(ModelError::EmptyGroup);
        }
        if start > end {
            return Err(ModelError::InvalidSpan { start, end });
        }
        Ok(Self {
            group,
            start,
            end,
            label: label.into(),
            kind,
            extra: extra.into(),
        })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }
}

/// A record together with its row index in the table it was built into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub index: usize,
    pub record: FeatureRecord,
}

/// Ordered, non-deduplicated sequence of feature records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureTable {
    rows: Vec<TableRow>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; its index is its position in this table.
    pub fn push(&mut self, record: FeatureRecord) {
        let index = self.rows.len();
        self.rows.push(TableRow { index, record });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn records(&self) -> impl Iterator<Item = &FeatureRecord> {
        self.rows.iter().map(|row| &row.record)
    }

    /// Distinct group labels in order of first appearance.
    pub fn groups(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in self.records() {
            if !seen.contains(&record.group()) {
                seen.push(record.group());
            }
        }
        seen
    }

    /// Rows whose group equals `group`, in order, with their original indices.
    ///
    /// An unknown group yields an empty table.
    #[must_use]
    pub fn filter_group(&self, group: &str) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .filter(|row| row.record.group() == group)
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<FeatureRecord> for FeatureTable {
    fn from_iter<I: IntoIterator<Item = FeatureRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.push(record);
        }
        table
    }
}
