// File: crates/csvchart-server/src/routes.rs
// Summary: Router construction and shared per-server state.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use csvchart_core::{theme, Alignment, RenderOptions, Theme};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;

/// Read-only settings shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub alignment: Alignment,
    pub theme: Theme,
    pub upload_limit_bytes: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            alignment: config.alignment,
            theme: theme::find(&config.theme),
            upload_limit_bytes: config.upload_limit_bytes(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { theme: self.theme, ..RenderOptions::default() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            theme: Theme::default(),
            upload_limit_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Build the route table. Constructed once at startup and handed to the server.
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.upload_limit_bytes;
    Router::new()
        .route("/", get(handlers::home))
        .route("/info", get(handlers::info))
        .route("/health", get(handlers::health))
        .route(
            "/upload",
            post(handlers::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
