// File: crates/csvchart-core/src/error.rs
// Summary: Typed failures of the pipeline and of the headless renderers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Where in the pipeline a failure happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Reading the byte stream into a [`crate::Table`].
    Parse,
    /// Column extraction, alignment and assembly.
    Chart,
}

/// Terminal failures of one pipeline run. None of them are retryable:
/// the same input always fails the same way.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("CSV file is empty")]
    EmptyInput,

    #[error("failed to read CSV: {source}")]
    MalformedInput {
        #[source]
        source: ReadError,
    },

    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("no data available for chart")]
    EmptyResult,
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::EmptyInput | Self::MalformedInput { .. } => Stage::Parse,
            Self::ColumnNotFound { .. } | Self::EmptyResult => Stage::Chart,
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(source: csv::Error) -> Self {
        Self::MalformedInput { source: ReadError::Csv(source) }
    }
}

/// Why a byte stream is not readable as delimited records.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: extraneous or missing \" in quoted-field")]
    Quote { line: u64 },

    #[error("line {line}: bare \" in non-quoted-field")]
    BareQuote { line: u64 },
}

/// Failures while serializing a chart description to an artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode chart as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write chart markup: {0}")]
    Format(#[from] std::fmt::Error),
}
