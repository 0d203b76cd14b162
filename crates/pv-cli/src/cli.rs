//! CLI argument definitions for ProteinVista.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "proteinvista",
    version,
    about = "ProteinVista - protein structure and annotation visualizer",
    long_about = "Visualize protein data from the command line.\n\n\
                  Builds a 3D genome view from an uploaded PDB file and a\n\
                  feature plot from UniProt annotations, written as HTML or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (TOML); built-in defaults are used when omitted.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available visualization tools.
    Tools,

    /// Build the 3D genome view from a PDB file.
    Genome(GenomeArgs),

    /// Search the accession catalog by id or protein name.
    Search(SearchArgs),

    /// Plot UniProt features for an accession.
    Features(FeaturesArgs),
}

#[derive(Parser)]
pub struct GenomeArgs {
    /// Structure file to upload.
    #[arg(value_name = "PDB_FILE")]
    pub pdb_file: PathBuf,

    /// Chromosome (group) to display; defaults to the first one.
    #[arg(long = "group", value_name = "GROUP")]
    pub group: Option<String>,

    /// How feature rows are generated from the structure.
    #[arg(long = "layout", value_enum)]
    pub layout: Option<LayoutArg>,

    /// Number of features generated per chain.
    #[arg(
        long = "features-per-group",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub features_per_group: Option<u16>,

    /// Figure output path (default: <PDB_STEM>-genome.<FORMAT>).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Figure file format.
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: FormatArg,

    /// Also write the selected feature rows as CSV.
    #[arg(long = "table-csv", value_name = "PATH")]
    pub table_csv: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Case-insensitive text matched against ids and names; empty lists all.
    #[arg(value_name = "TERM", default_value = "")]
    pub term: String,
}

#[derive(Parser)]
pub struct FeaturesArgs {
    /// UniProt accession (default: first catalog entry, or first search match).
    #[arg(value_name = "ACCESSION")]
    pub accession: Option<String>,

    /// Narrow the catalog first; the accession must then be one of the matches.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Figure output path (default: <ACCESSION>-features.<FORMAT>).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Figure file format.
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: FormatArg,

    /// Also write the feature rows as CSV.
    #[arg(long = "table-csv", value_name = "PATH")]
    pub table_csv: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Structure,
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Html,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
