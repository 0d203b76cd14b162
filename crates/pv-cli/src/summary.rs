use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pv_model::{FeatureKind, FeatureTable, LookupEntry, ProteinSummary, ToolInfo};
use pv_render::RenderOutcome;

use pv_cli::pipeline::{FeaturesReport, GenomeReport};

pub fn print_tools(tools: &[ToolInfo]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tool"),
        header_cell("Command"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for tool in tools {
        let command = match tool.command {
            Some(command) => Cell::new(command).fg(Color::Green),
            None => dim_cell("coming soon"),
        };
        table.add_row(vec![
            Cell::new(tool.name).add_attribute(Attribute::Bold),
            command,
            Cell::new(tool.description),
        ]);
    }
    println!("{table}");
}

pub fn print_search(entries: &[&LookupEntry]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Accession"), header_cell("Protein")]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.id).fg(Color::Cyan),
            Cell::new(entry.name),
        ]);
    }
    println!("{table}");
    println!("{} match(es)", entries.len());
}

pub fn print_genome(report: &GenomeReport, written: Option<&Path>) {
    println!("Source: {}", report.source.display());
    if let Some(id) = &report.structure.id_code {
        println!("Structure: {id}");
    }
    println!("Chromosomes: {}", report.groups.join(", "));
    if let Some(group) = &report.selection.group {
        println!("Selected: {group}");
    }

    println!("Extracted Data");
    println!("{}", feature_rows(&report.table));
    if !report.selection.is_empty() {
        println!("Filtered Data");
        println!("{}", feature_rows(&report.selection.table));
    }
    print_outcome(&report.outcome, written);
}

fn feature_rows(features: &FeatureTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lane"),
        header_cell("Chromosome"),
        header_cell("Start"),
        header_cell("End"),
        header_cell("Gene"),
        header_cell("Type"),
        header_cell("Domain"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in features.rows() {
        let record = &row.record;
        table.add_row(vec![
            dim_cell(row.index),
            Cell::new(record.group()),
            Cell::new(record.start()),
            Cell::new(record.end()),
            Cell::new(record.label()),
            Cell::new(record.kind()).fg(kind_color(record.kind())),
            Cell::new(record.extra()),
        ]);
    }
    table
}

pub fn print_features(report: &FeaturesReport, written: Option<&Path>) {
    let annotation = &report.annotation;
    println!("Accession: {}", annotation.accession);
    print_protein_summary(&annotation.summary);

    if !annotation.table.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Feature"),
            header_cell("Start"),
            header_cell("End"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        for feature in &annotation.table.features {
            table.add_row(vec![
                Cell::new(&feature.kind),
                Cell::new(feature.start),
                Cell::new(feature.end),
            ]);
        }
        println!("{table}");
    }
    print_outcome(&report.outcome, written);
}

fn print_protein_summary(summary: &ProteinSummary) {
    println!("Protein Name: {}", summary.protein_name);
    println!("Organism: {}", summary.organism);
    println!("Sequence Length: {}", summary.sequence_length);
    println!("Function: {}", summary.function);
}

fn print_outcome(outcome: &RenderOutcome, written: Option<&Path>) {
    match (outcome, written) {
        (RenderOutcome::Empty(message), _) => println!("{message}"),
        (RenderOutcome::Chart(figure), Some(path)) => {
            println!("Figure: {} ({} traces)", path.display(), figure.len());
        }
        (RenderOutcome::Chart(_), None) => {}
    }
}

fn kind_color(kind: FeatureKind) -> Color {
    match kind {
        FeatureKind::Exon => Color::Blue,
        FeatureKind::Intron => Color::Green,
        FeatureKind::Promoter => Color::Red,
        FeatureKind::Other => Color::Reset,
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
