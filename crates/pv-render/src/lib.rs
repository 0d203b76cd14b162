//! Figure building for ProteinVista.
//!
//! Turns the selected tables into Plotly figures and writes them out:
//!
//! - **Genome view**: [`genome_view`] draws two 3D segments per feature row
//! - **Feature plot**: [`feature_plot`] draws one horizontal bar per feature
//! - **Output**: [`write_figure`] saves a standalone HTML page or bare JSON
//!
//! An empty selection is not an error; both builders return
//! [`RenderOutcome::Empty`] with the message to show instead.

mod error;
mod figure;
mod output;
mod views;

// === Error Types ===
pub use error::{RenderError, Result};

// === Figure Model ===
pub use figure::{Axis, Bar, Figure, Layout, Line, Marker, Scatter3d, Scene, Title, Trace};

// === Views ===
pub use views::{
    DOMAIN_ELEVATION, FEATURE_BARMODE, FEATURE_ELEVATION, NO_FEATURES_MESSAGE,
    NO_GENOME_DATA_MESSAGE, RenderOutcome, feature_plot, genome_view, kind_color,
};

// === Output ===
pub use output::{
    DEFAULT_PLOTLY_CDN, DEFAULT_PROTVISTA_CDN, OutputFormat, PageContext, RenderConfig,
    figure_html, figure_json, write_figure,
};
