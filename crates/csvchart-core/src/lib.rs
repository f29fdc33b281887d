// File: crates/csvchart-core/src/lib.rs
// Summary: Core library entry point; exports the CSV-to-chart pipeline and headless renderers.

pub mod error;
pub mod table;
pub mod column;
pub mod align;
pub mod chart;
pub mod pipeline;
pub mod types;
pub mod grid;
pub mod scale;
pub mod theme;
pub mod render;

pub use error::{PipelineError, ReadError, RenderError, Result, Stage};
pub use table::Table;
pub use column::{extract_numbers, extract_pairs, extract_strings, resolve, ColumnIndex};
pub use align::{align, AlignedSeries, Alignment, UnknownAlignment};
pub use chart::{assemble, default_title, AxisSpec, ChartDescription, ChartKind, Point, UnknownChartKind};
pub use pipeline::{build_chart, chart_from_table, ChartRequest};
pub use render::{Format, RenderOptions};
pub use theme::Theme;
