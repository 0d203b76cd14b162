//! Plotly-compatible figure description.
//!
//! Only the attributes the two views set are modelled. Serializing a
//! [`Figure`] yields the `{data, layout}` object that `Plotly.newPlot`
//! accepts.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Number of traces in the figure.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter3d(Scatter3d),
    Bar(Bar),
}

/// A two-point segment in the 3D genome view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter3d {
    pub x: Vec<i64>,
    pub y: Vec<usize>,
    pub z: Vec<u8>,
    pub mode: &'static str,
    pub text: Vec<String>,
    pub marker: Marker,
    pub line: Line,
}

impl Scatter3d {
    /// Elevation shared by both points of the segment.
    pub fn elevation(&self) -> Option<u8> {
        self.z.first().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub orientation: &'static str,
    pub x: Vec<i64>,
    pub y: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub size: u32,
    /// Scalar mapped through the default colour scale.
    pub color: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
            showticklabels: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// Bars sharing a category stack as segments under `"relative"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<&'static str>,
}
