use anyhow::{Context, Result};
use tracing::{info, warn};

use pv_annotation::{EbiProteinsClient, NO_RESULTS_MESSAGE, search_catalog};
use pv_model::tool_registry;
use pv_render::{OutputFormat, PageContext};
use pv_structure::GenomeLayout;

use pv_cli::config::Settings;
use pv_cli::pipeline::{
    self, AccessionChoice, default_output_path, resolve_accession, write_annotation_csv,
    write_figure_output, write_table_csv,
};

use crate::cli::{FeaturesArgs, FormatArg, GenomeArgs, LayoutArg, SearchArgs};
use crate::summary::{print_features, print_genome, print_search, print_tools};

pub fn run_tools() -> Result<()> {
    print_tools(tool_registry());
    Ok(())
}

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let matches = search_catalog(&args.term);
    if matches.is_empty() {
        println!("{NO_RESULTS_MESSAGE}");
    } else {
        print_search(&matches);
    }
    Ok(())
}

pub fn run_genome(args: &GenomeArgs, settings: &Settings) -> Result<()> {
    let mut options = settings.genome;
    if let Some(layout) = args.layout {
        options.layout = match layout {
            LayoutArg::Structure => GenomeLayout::Structure,
            LayoutArg::Demo => GenomeLayout::Demo,
        };
    }
    if let Some(count) = args.features_per_group {
        options.features_per_group = usize::from(count);
    }
    let format = output_format(args.format);

    let report = pipeline::run_genome(&args.pdb_file, args.group.as_deref(), options)?;
    if report.selection.is_empty() {
        warn!(group = ?report.selection.group, "selected group has no rows");
    }

    let output = args.output.clone().unwrap_or_else(|| {
        let stem = args
            .pdb_file
            .file_stem()
            .map_or_else(|| "structure".into(), |stem| stem.to_string_lossy());
        default_output_path(&stem, "genome", format)
    });
    let written = write_figure_output(
        &report.outcome,
        &output,
        format,
        &settings.render,
        PageContext::default(),
    )?;
    if let Some(path) = &args.table_csv {
        write_table_csv(&report.selection.table, path)?;
    }
    print_genome(&report, written.as_deref());
    Ok(())
}

pub fn run_features(args: &FeaturesArgs, settings: &Settings) -> Result<()> {
    let choice = resolve_accession(args.search.as_deref(), args.accession.as_deref())?;
    let AccessionChoice::Lookup(accession) = choice else {
        println!("{NO_RESULTS_MESSAGE}");
        return Ok(());
    };
    info!(%accession, "looking up annotation");
    let format = output_format(args.format);

    let client = EbiProteinsClient::new(&settings.annotation).context("create annotation client")?;
    let report = pipeline::run_features(&client, &accession)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&accession, "features", format));
    let page = PageContext {
        accession: Some(&accession),
        summary: Some(&report.annotation.summary),
    };
    let written = write_figure_output(&report.outcome, &output, format, &settings.render, page)?;
    if let Some(path) = &args.table_csv {
        write_annotation_csv(&report.annotation, path)?;
    }
    print_features(&report, written.as_deref());
    Ok(())
}

fn output_format(format: FormatArg) -> OutputFormat {
    match format {
        FormatArg::Html => OutputFormat::Html,
        FormatArg::Json => OutputFormat::Json,
    }
}
