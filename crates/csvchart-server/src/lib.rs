// File: crates/csvchart-server/src/lib.rs
// Summary: HTTP collaborator around the csvchart pipeline; router, handlers, config.

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod telemetry;

pub use config::Config;
pub use error::ApiError;
pub use routes::{build_router, AppState};
