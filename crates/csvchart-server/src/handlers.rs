// File: crates/csvchart-server/src/handlers.rs
// Summary: Request handlers for the upload form, column reference, and chart upload.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use csvchart_core::render::Format;
use csvchart_core::{build_chart, default_title, ChartKind, ChartRequest};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::pages;
use crate::routes::AppState;

pub async fn home() -> Html<&'static str> {
    Html(pages::HOME)
}

pub async fn info() -> Html<String> {
    Html(pages::info())
}

pub async fn health() -> &'static str {
    "ok"
}

/// Fields of the upload form. Missing text fields read as empty strings.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<Bytes>,
    file_name: String,
    chart_type: String,
    x_column: String,
    y_column: String,
    title: String,
    format: String,
}

impl UploadForm {
    async fn read(mut multipart: Multipart, upload_limit_bytes: usize) -> Result<Self, ApiError> {
        let too_large = |status: StatusCode| {
            (status == StatusCode::PAYLOAD_TOO_LARGE)
                .then(|| ApiError::TooLarge { limit_mb: upload_limit_bytes / 1024 / 1024 })
        };

        let mut form = Self::default();
        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => return Err(too_large(e.status()).unwrap_or_else(|| ApiError::Form(e.body_text()))),
            };
            let name = field.name().unwrap_or_default().to_owned();
            if name == "csvfile" {
                form.file_name = field.file_name().unwrap_or_default().to_owned();
                let data = field.bytes().await.map_err(|e| {
                    too_large(e.status()).unwrap_or_else(|| ApiError::Form(e.body_text()))
                })?;
                form.file = Some(data);
                continue;
            }

            let slot = match name.as_str() {
                "chartType" => &mut form.chart_type,
                "xColumn" => &mut form.x_column,
                "yColumn" => &mut form.y_column,
                "title" => &mut form.title,
                "format" => &mut form.format,
                _ => continue,
            };
            *slot = field.text().await.map_err(|e| ApiError::Form(e.body_text()))?;
        }
        Ok(form)
    }
}

/// Parse the uploaded CSV and answer with the rendered chart.
pub async fn upload(State(state): State<AppState>, multipart: Multipart) -> Result<Response, ApiError> {
    let form = UploadForm::read(multipart, state.upload_limit_bytes).await?;

    let file = form.file.ok_or(ApiError::MissingFile)?;
    if !form.file_name.to_lowercase().ends_with(".csv") {
        return Err(ApiError::NotCsv);
    }
    let kind: ChartKind = form.chart_type.parse()?;
    let format = if form.format.is_empty() { Format::default() } else { form.format.parse()? };
    let title = if form.title.is_empty() {
        default_title(&form.y_column, &form.x_column)
    } else {
        form.title
    };

    debug!(
        file = %form.file_name,
        bytes = file.len(),
        %kind,
        x = %form.x_column,
        y = %form.y_column,
        %format,
        "chart requested"
    );

    let request = ChartRequest::new(kind, form.x_column, form.y_column)
        .with_title(title)
        .with_alignment(state.alignment);
    let opts = state.render_options();

    // Parsing and rendering are CPU-bound; keep them off the async workers.
    let (points, body) = tokio::task::spawn_blocking(move || -> Result<_, ApiError> {
        let chart = build_chart(&file, &request)?;
        let body = format.render(&chart, &opts)?;
        Ok((chart.len(), body))
    })
    .await??;

    info!(file = %form.file_name, points, %format, "chart rendered");
    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}
