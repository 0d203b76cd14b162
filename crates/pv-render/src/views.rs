//! The genome view and the protein feature plot.

use tracing::debug;

use pv_model::{AnnotationTable, FeatureKind, FeatureTable, TableRow};

use crate::figure::{Axis, Bar, Figure, Layout, Line, Marker, Scatter3d, Scene, Title, Trace};

/// Shown instead of the genome view when the selected group has no rows.
pub const NO_GENOME_DATA_MESSAGE: &str = "No data to display for the selected chromosome.";

/// Shown instead of the feature plot when the document lists no features.
pub const NO_FEATURES_MESSAGE: &str = "No features found for visualization.";

/// Elevation of the feature layer.
pub const FEATURE_ELEVATION: u8 = 0;

/// Elevation of the domain layer drawn above each feature.
pub const DOMAIN_ELEVATION: u8 = 1;

const TRACE_MODE: &str = "lines+markers+text";

/// Feature rows of the same type stack along the position axis.
pub const FEATURE_BARMODE: &str = "relative";

/// A figure, or the informational message shown in its place.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Chart(Figure),
    Empty(&'static str),
}

impl RenderOutcome {
    pub fn figure(&self) -> Option<&Figure> {
        match self {
            Self::Chart(figure) => Some(figure),
            Self::Empty(_) => None,
        }
    }
}

/// Line colour of a feature segment.
#[must_use]
pub const fn kind_color(kind: FeatureKind) -> &'static str {
    match kind {
        FeatureKind::Exon => "blue",
        FeatureKind::Intron => "green",
        FeatureKind::Promoter => "red",
        FeatureKind::Other => "black",
    }
}

/// Build the 3D genome view for the rows of `group`.
///
/// Every row contributes a feature segment at elevation 0 and a dashed
/// domain segment at elevation 1, both on the lane given by the row's
/// index in the unfiltered table.
pub fn genome_view(group: &str, table: &FeatureTable) -> RenderOutcome {
    if table.is_empty() {
        return RenderOutcome::Empty(NO_GENOME_DATA_MESSAGE);
    }
    let data: Vec<Trace> = table.rows().iter().flat_map(row_traces).collect();
    debug!(group, rows = table.len(), traces = data.len(), "built genome view");

    let mut yaxis = Axis::titled("Gene Index");
    yaxis.showticklabels = Some(false);
    RenderOutcome::Chart(Figure {
        data,
        layout: Layout {
            title: Title::new(format!("3D Genome View for Chromosome {group} with Domains")),
            scene: Some(Scene {
                xaxis: Axis::titled("Position"),
                yaxis,
                zaxis: Axis::titled(""),
            }),
            xaxis: None,
            yaxis: None,
            barmode: None,
        },
    })
}

fn row_traces(row: &TableRow) -> [Trace; 2] {
    let record = &row.record;
    let x = vec![record.start(), record.end()];
    let y = vec![row.index, row.index];
    let feature = Scatter3d {
        x: x.clone(),
        y: y.clone(),
        z: vec![FEATURE_ELEVATION; 2],
        mode: TRACE_MODE,
        text: vec![record.label().to_string(); 2],
        marker: Marker {
            size: 5,
            color: record.start(),
        },
        line: Line {
            color: kind_color(record.kind()),
            width: 2,
            dash: None,
        },
    };
    let domain = Scatter3d {
        x,
        y,
        z: vec![DOMAIN_ELEVATION; 2],
        mode: TRACE_MODE,
        text: vec![record.extra().to_string(); 2],
        marker: Marker {
            size: 3,
            color: record.end(),
        },
        line: Line {
            color: "purple",
            width: 1,
            dash: Some("dash"),
        },
    };
    [Trace::Scatter3d(feature), Trace::Scatter3d(domain)]
}

/// Build the horizontal bar chart of feature start positions by type.
pub fn feature_plot(table: &AnnotationTable) -> RenderOutcome {
    if table.is_empty() {
        return RenderOutcome::Empty(NO_FEATURES_MESSAGE);
    }
    let (x, y) = table
        .features
        .iter()
        .map(|feature| (feature.start, feature.kind.clone()))
        .unzip();
    debug!(accession = %table.accession, bars = table.len(), "built feature plot");
    RenderOutcome::Chart(Figure {
        data: vec![Trace::Bar(Bar {
            orientation: "h",
            x,
            y,
        })],
        layout: Layout {
            title: Title::new("Protein Features"),
            scene: None,
            xaxis: Some(Axis::titled("Start Position")),
            yaxis: Some(Axis::titled("feature")),
            barmode: Some(FEATURE_BARMODE),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_model::{AnnotationFeature, FeatureRecord};

    fn record(group: &str, start: i64, end: i64, kind: FeatureKind) -> FeatureRecord {
        FeatureRecord::new(group, start, end, "GeneA", kind, "Domain1").unwrap()
    }

    #[test]
    fn empty_group_is_informational() {
        assert_eq!(
            genome_view("9", &FeatureTable::new()),
            RenderOutcome::Empty(NO_GENOME_DATA_MESSAGE)
        );
    }

    #[test]
    fn colours_follow_kind() {
        let table: FeatureTable = [
            record("1", 1, 2, FeatureKind::Exon),
            record("1", 3, 4, FeatureKind::Other),
        ]
        .into_iter()
        .collect();
        let figure = genome_view("1", &table).figure().cloned().unwrap();
        let colours: Vec<&str> = figure
            .data
            .iter()
            .map(|trace| match trace {
                Trace::Scatter3d(t) => t.line.color,
                Trace::Bar(_) => unreachable!(),
            })
            .collect();
        assert_eq!(colours, vec!["blue", "purple", "black", "purple"]);
    }

    #[test]
    fn domain_layer_uses_extra_and_end() {
        let table: FeatureTable =
            std::iter::once(record("1", 10, 20, FeatureKind::Intron)).collect();
        let figure = genome_view("1", &table).figure().cloned().unwrap();
        let Trace::Scatter3d(domain) = &figure.data[1] else {
            panic!("expected scatter3d");
        };
        assert_eq!(domain.text, vec!["Domain1", "Domain1"]);
        assert_eq!(domain.marker.color, 20);
        assert_eq!(domain.line.dash, Some("dash"));
    }

    #[test]
    fn no_features_is_informational() {
        let table = AnnotationTable::new("P00000", Vec::new());
        assert_eq!(feature_plot(&table), RenderOutcome::Empty(NO_FEATURES_MESSAGE));
    }

    #[test]
    fn bar_per_feature() {
        let table = AnnotationTable::new(
            "P69905",
            vec![
                AnnotationFeature {
                    kind: "Chain".to_string(),
                    start: 1,
                    end: 141,
                },
                AnnotationFeature {
                    kind: "Helix".to_string(),
                    start: 4,
                    end: 17,
                },
            ],
        );
        let figure = feature_plot(&table).figure().cloned().unwrap();
        assert_eq!(figure.len(), 1);
        let Trace::Bar(bar) = &figure.data[0] else {
            panic!("expected bar");
        };
        assert_eq!(bar.x, vec![1, 4]);
        assert_eq!(bar.y, vec!["Chain", "Helix"]);
    }
}
