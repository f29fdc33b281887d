// File: crates/csvchart-server/src/error.rs
// Summary: Client-facing request failures and their HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use csvchart_core::render::UnknownFormat;
use csvchart_core::{PipelineError, RenderError, Stage, UnknownChartKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to parse form: {0}")]
    Form(String),

    #[error("File too large. Maximum upload size is {limit_mb} MB.")]
    TooLarge { limit_mb: usize },

    #[error("Failed to get file")]
    MissingFile,

    #[error("Please upload a CSV file")]
    NotCsv,

    #[error(transparent)]
    ChartKind(#[from] UnknownChartKind),

    #[error(transparent)]
    Format(#[from] UnknownFormat),

    #[error("{}: {source}", pipeline_prefix(.source))]
    Pipeline {
        #[from]
        source: PipelineError,
    },

    #[error("Failed to render chart: {0}")]
    Render(#[from] RenderError),

    #[error("chart worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

fn pipeline_prefix(err: &PipelineError) -> &'static str {
    match err.stage() {
        Stage::Parse => "Failed to process CSV",
        Stage::Chart => "Failed to generate chart",
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Render(_) | Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Form(_)
            | Self::MissingFile
            | Self::NotCsv
            | Self::ChartKind(_)
            | Self::Format(_)
            | Self::Pipeline { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{self}");
        } else {
            tracing::warn!(status = status.as_u16(), "{self}");
        }
        (status, self.to_string()).into_response()
    }
}
