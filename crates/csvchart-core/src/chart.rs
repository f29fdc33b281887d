// File: crates/csvchart-core/src/chart.rs
// Summary: Chart description value object and the category/value chart assembler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::align::AlignedSeries;

/// The two supported plot shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Invalid chart type '{0}'")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    /// Exact tokens only: `line` or `bar`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            other => Err(UnknownChartKind(other.to_owned())),
        }
    }
}

/// One plotted point: a category label and its value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub category: String,
    pub value: f64,
}

/// Axis title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub label: String,
}

impl AxisSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// Renderer-agnostic description of a single-series category/value chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub kind: ChartKind,
    pub title: String,
    pub category_axis: AxisSpec,
    pub value_axis: AxisSpec,
    pub series_name: String,
    pub points: Vec<Point>,
}

impl ChartDescription {
    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.category.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

/// Build a chart with one series named after `value_label`.
/// Labels and title are taken verbatim; an empty title stays empty.
pub fn assemble(
    kind: ChartKind,
    series: AlignedSeries,
    category_label: &str,
    value_label: &str,
    title: &str,
) -> ChartDescription {
    let (categories, values) = series.into_parts();
    let points = categories
        .into_iter()
        .zip(values)
        .map(|(category, value)| Point { category, value })
        .collect();

    ChartDescription {
        kind,
        title: title.to_owned(),
        category_axis: AxisSpec::new(category_label),
        value_axis: AxisSpec::new(value_label),
        series_name: value_label.to_owned(),
        points,
    }
}

/// Title used by callers when the user left it blank: `"<value> vs <category>"`.
pub fn default_title(value_label: &str, category_label: &str) -> String {
    format!("{value_label} vs {category_label}")
}
