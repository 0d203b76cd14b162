//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

use pv_annotation::{AnnotationError, AnnotationSource, NotFoundReason, ProteinDocument};
use pv_cli::config::Settings;
use pv_cli::pipeline::{
    AccessionChoice, default_output_path, resolve_accession, run_features, run_genome,
    write_annotation_csv, write_figure_output, write_table_csv,
};
use pv_render::{
    NO_FEATURES_MESSAGE, NO_GENOME_DATA_MESSAGE, OutputFormat, PageContext, RenderConfig,
    RenderOutcome,
};
use pv_structure::{ExtractOptions, GenomeLayout};

fn atom_line(serial: usize, chain: char, residue: i64) -> String {
    format!(
        "ATOM  {serial:>5}  CA  GLY {chain}{residue:>4}    {x:>8.3}{y:>8.3}{z:>8.3}  1.00  0.00           C",
        x = 0.5,
        y = -1.25,
        z = 10.0,
    )
}

fn write_pdb(dir: &Path, chains: &[(char, i64)]) -> std::path::PathBuf {
    let mut lines = vec![
        "HEADER    PLANT PROTEIN                           30-APR-81   1CRN".to_string(),
        "TITLE     WATER STRUCTURE OF A HYDROPHOBIC PROTEIN".to_string(),
    ];
    let mut serial = 1;
    for (chain, residues) in chains {
        for residue in 1..=*residues {
            lines.push(atom_line(serial, *chain, residue));
            serial += 1;
        }
    }
    lines.push("END".to_string());
    let path = dir.join("1crn.pdb");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

struct StubSource(Option<Value>);

impl AnnotationSource for StubSource {
    fn fetch(&self, accession: &str) -> pv_annotation::Result<ProteinDocument> {
        self.0
            .clone()
            .map(ProteinDocument::new)
            .ok_or_else(|| AnnotationError::not_found(accession, NotFoundReason::Status(404)))
    }
}

#[test]
fn genome_defaults_to_first_group() {
    let dir = TempDir::new().unwrap();
    let path = write_pdb(dir.path(), &[('A', 12), ('B', 6)]);
    let report = run_genome(&path, None, ExtractOptions::default()).unwrap();

    assert_eq!(report.structure.id_code.as_deref(), Some("1CRN"));
    assert_eq!(report.groups, vec!["A", "B"]);
    assert_eq!(report.table.len(), 6);
    let lanes: Vec<usize> = report.table.rows().iter().map(|row| row.index).collect();
    assert_eq!(lanes, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(report.selection.group.as_deref(), Some("A"));
    assert_eq!(report.selection.table.len(), 3);
    assert_eq!(report.outcome.figure().map(|f| f.len()), Some(6));
}

#[test]
fn genome_unknown_group_is_empty_state() {
    let dir = TempDir::new().unwrap();
    let path = write_pdb(dir.path(), &[('A', 6)]);
    let report = run_genome(&path, Some("Q"), ExtractOptions::default()).unwrap();
    assert!(report.selection.is_empty());
    assert_eq!(report.outcome, RenderOutcome::Empty(NO_GENOME_DATA_MESSAGE));

    let written = write_figure_output(
        &report.outcome,
        &dir.path().join("genome.html"),
        OutputFormat::Html,
        &RenderConfig::default(),
        PageContext::default(),
    )
    .unwrap();
    assert!(written.is_none());
    assert!(!dir.path().join("genome.html").exists());
}

#[test]
fn genome_parse_failure_has_user_message() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.pdb");
    fs::write(&path, "REMARK nothing to see here\n").unwrap();
    let err = run_genome(&path, None, ExtractOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "The uploaded file is not a valid PDB file.");
}

#[test]
fn genome_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.pdb");
    let err = run_genome(&path, None, ExtractOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("read "));
}

#[test]
fn demo_layout_writes_csv_of_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_pdb(dir.path(), &[('A', 4)]);
    let options = ExtractOptions {
        layout: GenomeLayout::Demo,
        ..ExtractOptions::default()
    };
    let report = run_genome(&path, Some("2"), options).unwrap();
    let csv_path = dir.path().join("genome.csv");
    write_table_csv(&report.selection.table, &csv_path).unwrap();

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Chromosome,Start,End,Gene,Type,Domain");
    assert_eq!(lines[1], "2,100,200,GeneD,Exon,Domain4");
    assert_eq!(lines.len(), 4);
}

#[test]
fn resolve_without_search_accepts_any_accession() {
    assert_eq!(
        resolve_accession(None, Some(" Q99999 ")).unwrap(),
        AccessionChoice::Lookup("Q99999".to_string())
    );
    assert_eq!(
        resolve_accession(None, None).unwrap(),
        AccessionChoice::Lookup("P69905".to_string())
    );
}

#[test]
fn resolve_with_search() {
    assert_eq!(
        resolve_accession(Some("kinase"), None).unwrap(),
        AccessionChoice::Lookup("P49760".to_string())
    );
    assert_eq!(
        resolve_accession(Some("no-such-protein"), None).unwrap(),
        AccessionChoice::NoResults
    );
    let err = resolve_accession(Some("hemoglobin"), Some("P02649")).unwrap_err();
    assert!(err.to_string().contains("P02649"));
}

#[test]
fn features_single_chain_writes_page_and_csv() {
    let dir = TempDir::new().unwrap();
    let source = StubSource(Some(json!({
        "protein": {"recommendedName": {"fullName": {"value": "Hemoglobin subunit alpha"}}},
        "organism": {"scientificName": "Homo sapiens"},
        "sequence": {"length": 142},
        "features": [{"type": "Chain", "begin": "1", "end": "141"}]
    })));
    let report = run_features(&source, "P69905").unwrap();
    assert_eq!(report.annotation.table.len(), 1);
    assert_eq!(report.annotation.summary.function, "N/A");

    let html_path = dir.path().join("p69905.html");
    let page = PageContext {
        accession: Some("P69905"),
        summary: Some(&report.annotation.summary),
    };
    let written = write_figure_output(
        &report.outcome,
        &html_path,
        OutputFormat::Html,
        &RenderConfig::default(),
        page,
    )
    .unwrap();
    assert_eq!(written.as_deref(), Some(html_path.as_path()));
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains(r#"accession="P69905""#));
    assert!(html.contains("Homo sapiens"));

    let csv_path = dir.path().join("features.csv");
    write_annotation_csv(&report.annotation, &csv_path).unwrap();
    assert_eq!(fs::read_to_string(&csv_path).unwrap(), "feature,start,end\nChain,1,141\n");
}

#[test]
fn features_without_rows_is_empty_state() {
    let source = StubSource(Some(json!({"features": []})));
    let report = run_features(&source, "P12345").unwrap();
    assert_eq!(report.outcome, RenderOutcome::Empty(NO_FEATURES_MESSAGE));
}

#[test]
fn features_not_found_is_error() {
    let err = run_features(&StubSource(None), "P00000").unwrap_err();
    assert_eq!(err.to_string(), "No data found for the given Uniprot Accession ID.");
    assert!(format!("{err:#}").contains("HTTP status 404"));
}

#[test]
fn default_output_names() {
    assert_eq!(
        default_output_path("1crn", "genome", OutputFormat::Html),
        Path::new("1crn-genome.html")
    );
    assert_eq!(
        default_output_path("P69905", "features", OutputFormat::Json),
        Path::new("P69905-features.json")
    );
}

#[test]
fn settings_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("proteinvista.toml");
    fs::write(
        &path,
        "[genome]\nfeatures_per_group = 2\n\n[render]\nplotly_cdn = \"plotly.js\"\n",
    )
    .unwrap();
    let settings = Settings::load(Some(&path)).unwrap();
    assert_eq!(settings.genome.features_per_group, 2);
    assert_eq!(settings.render.plotly_cdn, "plotly.js");
    insta::assert_json_snapshot!(settings.genome, @r#"
    {
      "layout": "structure",
      "features_per_group": 2
    }
    "#);
}
