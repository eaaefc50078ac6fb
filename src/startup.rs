use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers::{generate_copy_handler, health_handler, metrics_handler};
use crate::state::AppState;

pub const INDEX_DOCUMENT: &str = "index.html";

// Files under `static_dir`, anything unmatched gets index.html so the
// front-end router can take over. Directories are not files, so they fall
// through too instead of redirecting. Missing index.html means 404.
fn static_assets(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir)
        .append_index_html_on_directories(false)
        .fallback(ServeFile::new(static_dir.join(INDEX_DOCUMENT)))
}

pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/generate-copy", post(generate_copy_handler))
        .fallback_service(static_assets(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
