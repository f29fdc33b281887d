// File: crates/csvchart-core/src/render/mod.rs
// Summary: Headless serialization of a chart description to SVG, HTML, or JSON.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::chart::ChartDescription;
use crate::error::RenderError;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

mod html_writer;
mod json_writer;
mod svg_writer;

pub use html_writer::html;
pub use json_writer::json;
pub use svg_writer::svg;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, legend, tick and axis text. Off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// Text artifact formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Html,
    Svg,
    Json,
}

impl Format {
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Svg => "image/svg+xml",
            Self::Json => "application/json",
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }

    pub fn render(self, chart: &ChartDescription, opts: &RenderOptions) -> Result<String, RenderError> {
        match self {
            Self::Html => html(chart, opts),
            Self::Svg => svg(chart, opts),
            Self::Json => json(chart),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Error)]
#[error("unsupported output format '{0}'")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

/// Escape text for XML/HTML element content and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
