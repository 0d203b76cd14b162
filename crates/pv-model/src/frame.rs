//! Polars views of the feature tables.
//!
//! Column names follow what the tools display: the genome table uses the
//! `Chromosome/Start/End/Gene/Type/Domain` header, the annotation table uses
//! `feature/start/end`.

use std::fs::File;
use std::path::Path;

use polars::prelude::{Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, SerWriter, Series};

use crate::annotation::AnnotationTable;
use crate::error::{ModelError, Result};
use crate::feature::FeatureTable;

/// Genome table columns, in display order.
pub const FEATURE_COLUMNS: [&str; 6] = ["Chromosome", "Start", "End", "Gene", "Type", "Domain"];

/// Annotation table columns, in display order.
pub const ANNOTATION_COLUMNS: [&str; 3] = ["feature", "start", "end"];

impl FeatureTable {
    /// Build a DataFrame with one row per record.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let records: Vec<_> = self.records().collect();
        let columns: Vec<Column> = vec![
            Series::new(
                FEATURE_COLUMNS[0].into(),
                records.iter().map(|r| r.group()).collect::<Vec<_>>(),
            )
            .into_column(),
            Series::new(
                FEATURE_COLUMNS[1].into(),
                records.iter().map(|r| r.start()).collect::<Vec<i64>>(),
            )
            .into_column(),
            Series::new(
                FEATURE_COLUMNS[2].into(),
                records.iter().map(|r| r.end()).collect::<Vec<i64>>(),
            )
            .into_column(),
            Series::new(
                FEATURE_COLUMNS[3].into(),
                records.iter().map(|r| r.label()).collect::<Vec<_>>(),
            )
            .into_column(),
            Series::new(
                FEATURE_COLUMNS[4].into(),
                records.iter().map(|r| r.kind().as_str()).collect::<Vec<_>>(),
            )
            .into_column(),
            Series::new(
                FEATURE_COLUMNS[5].into(),
                records.iter().map(|r| r.extra()).collect::<Vec<_>>(),
            )
            .into_column(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

impl AnnotationTable {
    /// Build a DataFrame with one row per feature.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns: Vec<Column> = vec![
            Series::new(
                ANNOTATION_COLUMNS[0].into(),
                self.features
                    .iter()
                    .map(|f| f.kind.as_str())
                    .collect::<Vec<_>>(),
            )
            .into_column(),
            Series::new(
                ANNOTATION_COLUMNS[1].into(),
                self.features.iter().map(|f| f.start).collect::<Vec<i64>>(),
            )
            .into_column(),
            Series::new(
                ANNOTATION_COLUMNS[2].into(),
                self.features.iter().map(|f| f.end).collect::<Vec<i64>>(),
            )
            .into_column(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

/// Write a DataFrame as CSV with a header row.
pub fn write_csv(path: &Path, frame: &mut DataFrame) -> Result<()> {
    let mut file = File::create(path).map_err(|source| ModelError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)?;
    Ok(())
}
