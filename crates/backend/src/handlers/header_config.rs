use axum::{extract::State, Json};
use contracts::navigation::HeaderConfig;

use crate::AppState;

/// GET /api/header-config
pub async fn get(State(state): State<AppState>) -> Json<HeaderConfig> {
    Json(state.header.as_ref().clone())
}
