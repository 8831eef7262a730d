use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, AppState};

/// All HTTP routes of the site server
///
/// Unknown paths are looked up in the assets directory, then in the frontend
/// build; anything else gets `index.html` so client-side routes resolve.
pub fn configure_routes(state: AppState, dist_dir: &Path, assets_dir: &Path) -> Router {
    let frontend = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));
    let static_files = ServeDir::new(assets_dir).fallback(frontend);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/header-config", get(handlers::header_config::get))
        .with_state(state)
        .fallback_service(static_files)
}
