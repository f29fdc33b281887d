// File: crates/csvchart-core/src/render/json_writer.rs
// Summary: JSON artifact; non-finite values serialize as null.

use crate::chart::ChartDescription;
use crate::error::RenderError;

pub fn json(chart: &ChartDescription) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(chart)?)
}
