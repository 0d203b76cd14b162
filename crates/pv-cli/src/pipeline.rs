//! The two visualization pipelines, independent of argument parsing.
//!
//! Each function takes already resolved inputs and returns a report the
//! binary prints. Writing files is left to [`write_figure_output`] and
//! [`write_table_csv`] so tests can run the pipelines without touching disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use pv_annotation::{
    Annotation, AnnotationSource, CatalogSelection, catalog, fetch_annotation, select_accession,
};
use pv_model::{FeatureTable, write_csv};
use pv_render::{
    OutputFormat, PageContext, RenderConfig, RenderOutcome, feature_plot, genome_view,
    write_figure,
};
use pv_structure::{ExtractOptions, GroupSelection, Structure, StructureExtractor, select_group};

/// Result of the genome pipeline for one structure file.
#[derive(Debug, Clone)]
pub struct GenomeReport {
    pub source: PathBuf,
    pub structure: Structure,
    /// The unfiltered table extracted from the structure.
    pub table: FeatureTable,
    /// Every group of the unfiltered table, in first-appearance order.
    pub groups: Vec<String>,
    pub selection: GroupSelection,
    pub outcome: RenderOutcome,
}

/// Extract the feature table from `path` and render the view for `group`.
pub fn run_genome(
    path: &Path,
    group: Option<&str>,
    options: ExtractOptions,
) -> Result<GenomeReport> {
    let span = info_span!("genome", source = %path.display());
    let _guard = span.enter();

    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let extraction = StructureExtractor::new(options)
        .extract_upload(&bytes)
        .map_err(|error| {
            let message = error.user_message().to_string();
            anyhow::Error::new(error).context(message)
        })?;

    let groups: Vec<String> = extraction
        .table
        .groups()
        .into_iter()
        .map(str::to_string)
        .collect();
    let selection = select_group(&extraction.table, group);
    let label = selection.group.as_deref().unwrap_or_default();
    let outcome = genome_view(label, &selection.table);
    info!(group = label, rows = selection.table.len(), "genome view ready");

    Ok(GenomeReport {
        source: path.to_path_buf(),
        structure: extraction.structure,
        table: extraction.table,
        groups,
        selection,
        outcome,
    })
}

/// Which accession the features pipeline should look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessionChoice {
    Lookup(String),
    /// The search term matched no catalog entry.
    NoResults,
}

/// Resolve the accession from an optional search term and an optional id.
///
/// Without a search term any accession is accepted and the first catalog
/// entry is the default. With a search term the accession must be one of
/// the matches, and the first match is the default.
pub fn resolve_accession(search: Option<&str>, requested: Option<&str>) -> Result<AccessionChoice> {
    let Some(term) = search else {
        let accession = requested
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| catalog().first().map(|entry| entry.id))
            .ok_or_else(|| anyhow!("accession catalog is empty"))?;
        return Ok(AccessionChoice::Lookup(accession.to_string()));
    };
    match select_accession(term, requested) {
        CatalogSelection::Selected(entry) => Ok(AccessionChoice::Lookup(entry.id.to_string())),
        CatalogSelection::NoResults => Ok(AccessionChoice::NoResults),
        CatalogSelection::NotListed(id) => Err(anyhow!(
            "accession {id} is not among the catalog matches for \"{}\"",
            term.trim()
        )),
    }
}

/// Result of the features pipeline for one accession.
#[derive(Debug, Clone)]
pub struct FeaturesReport {
    pub annotation: Annotation,
    pub outcome: RenderOutcome,
}

/// Fetch `accession` from `source` and build the feature plot.
pub fn run_features<S>(source: &S, accession: &str) -> Result<FeaturesReport>
where
    S: AnnotationSource + ?Sized,
{
    let span = info_span!("features", accession);
    let _guard = span.enter();

    let annotation = fetch_annotation(source, accession).map_err(|error| {
        let message = error.user_message().to_string();
        anyhow::Error::new(error).context(message)
    })?;
    let outcome = feature_plot(&annotation.table);
    Ok(FeaturesReport {
        annotation,
        outcome,
    })
}

/// Write the figure of `outcome`, returning the path when one was written.
pub fn write_figure_output(
    outcome: &RenderOutcome,
    path: &Path,
    format: OutputFormat,
    config: &RenderConfig,
    page: PageContext<'_>,
) -> Result<Option<PathBuf>> {
    let Some(figure) = outcome.figure() else {
        return Ok(None);
    };
    write_figure(path, figure, format, config, page)
        .with_context(|| format!("write figure {}", path.display()))?;
    Ok(Some(path.to_path_buf()))
}

/// Write the genome table as CSV.
pub fn write_table_csv(table: &FeatureTable, path: &Path) -> Result<()> {
    let mut frame = table.to_dataframe().context("build feature frame")?;
    write_csv(path, &mut frame).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = table.len(), "wrote feature table");
    Ok(())
}

/// Write the annotation table as CSV.
pub fn write_annotation_csv(annotation: &Annotation, path: &Path) -> Result<()> {
    let mut frame = annotation
        .table
        .to_dataframe()
        .context("build annotation frame")?;
    write_csv(path, &mut frame).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = annotation.table.len(), "wrote annotation table");
    Ok(())
}

/// Default output name `<stem>-<suffix>.<ext>`, relative to the working directory.
pub fn default_output_path(stem: &str, suffix: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{stem}-{suffix}.{}", format.extension()))
}
