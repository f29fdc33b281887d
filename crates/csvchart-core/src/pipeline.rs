// File: crates/csvchart-core/src/pipeline.rs
// Summary: Single-pass entry point: bytes -> table -> aligned series -> chart description.

use crate::align::Alignment;
use crate::chart::{assemble, ChartDescription, ChartKind};
use crate::error::Result;
use crate::table::Table;

/// Parameters of one chart request. `title` is used verbatim; callers that
/// want the `"<value> vs <category>"` fallback apply [`crate::default_title`]
/// before building the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub category_column: String,
    pub value_column: String,
    pub title: String,
    pub alignment: Alignment,
}

impl ChartRequest {
    pub fn new(kind: ChartKind, category_column: impl Into<String>, value_column: impl Into<String>) -> Self {
        Self {
            kind,
            category_column: category_column.into(),
            value_column: value_column.into(),
            title: String::new(),
            alignment: Alignment::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Run the whole pipeline over an uploaded body.
/// Axis labels and the series name are the column names as requested.
pub fn build_chart(bytes: &[u8], request: &ChartRequest) -> Result<ChartDescription> {
    let table = Table::from_bytes(bytes)?;
    chart_from_table(&table, request)
}

/// Same as [`build_chart`] for an already parsed table.
pub fn chart_from_table(table: &Table, request: &ChartRequest) -> Result<ChartDescription> {
    let series = request
        .alignment
        .apply(table, &request.category_column, &request.value_column)?;
    Ok(assemble(
        request.kind,
        series,
        &request.category_column,
        &request.value_column,
        &request.title,
    ))
}
