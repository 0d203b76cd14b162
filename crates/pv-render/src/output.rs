//! Standalone HTML and JSON figure files.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use pv_model::ProteinSummary;

use crate::error::{RenderError, Result};
use crate::figure::Figure;

pub const DEFAULT_PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const DEFAULT_PROTVISTA_CDN: &str =
    "https://cdn.jsdelivr.net/npm/protvista-uniprot@0.3.0/dist/protvista-uniprot.min.js";

/// File format of a written figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Self-contained page that draws the figure with plotly.js.
    #[default]
    Html,
    /// The bare `{data, layout}` figure object.
    Json,
}

impl OutputFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Script locations referenced by HTML pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub plotly_cdn: String,
    pub protvista_cdn: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            plotly_cdn: DEFAULT_PLOTLY_CDN.to_string(),
            protvista_cdn: DEFAULT_PROTVISTA_CDN.to_string(),
        }
    }
}

/// Optional page content around the figure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageContext<'a> {
    /// Embeds the ProtVista UniProt viewer for this accession.
    pub accession: Option<&'a str>,
    /// Protein display fields listed above the figure.
    pub summary: Option<&'a ProteinSummary>,
}

/// Serialize the figure as pretty JSON.
pub fn figure_json(figure: &Figure) -> Result<String> {
    Ok(serde_json::to_string_pretty(figure)?)
}

/// Build a standalone HTML page drawing `figure`.
pub fn figure_html(
    figure: &Figure,
    config: &RenderConfig,
    page: PageContext<'_>,
) -> Result<String> {
    // `</` inside the inline script would end the element early.
    let json = serde_json::to_string(figure)?.replace("</", "<\\/");
    let title = escape_html(figure.title());

    let mut html = String::new();
    write_page(&mut html, &json, &title, config, page)?;
    Ok(html)
}

fn write_page(
    out: &mut String,
    json: &str,
    title: &str,
    config: &RenderConfig,
    page: PageContext<'_>,
) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "<script src=\"{}\"></script>", escape_html(&config.plotly_cdn))?;
    if page.accession.is_some() {
        writeln!(out, "<script src=\"{}\"></script>", escape_html(&config.protvista_cdn))?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    if let Some(summary) = page.summary {
        writeln!(out, "<dl>")?;
        for (term, value) in [
            ("Protein Name", &summary.protein_name),
            ("Organism", &summary.organism),
            ("Sequence Length", &summary.sequence_length),
            ("Function", &summary.function),
        ] {
            writeln!(out, "<dt>{term}</dt><dd>{}</dd>", escape_html(value))?;
        }
        writeln!(out, "</dl>")?;
    }
    writeln!(out, "<div id=\"figure\"></div>")?;
    if let Some(accession) = page.accession {
        writeln!(
            out,
            "<protvista-uniprot accession=\"{}\"></protvista-uniprot>",
            escape_html(accession)
        )?;
    }
    writeln!(out, "<script>")?;
    writeln!(out, "const figure = {json};")?;
    writeln!(out, "Plotly.newPlot(\"figure\", figure.data, figure.layout);")?;
    writeln!(out, "</script>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

/// Write `figure` to `path` in the requested format.
pub fn write_figure(
    path: &Path,
    figure: &Figure,
    format: OutputFormat,
    config: &RenderConfig,
    page: PageContext<'_>,
) -> Result<()> {
    let contents = match format {
        OutputFormat::Html => figure_html(figure, config, page)?,
        OutputFormat::Json => figure_json(figure)?,
    };
    fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), %format, traces = figure.len(), "wrote figure");
    Ok(())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
