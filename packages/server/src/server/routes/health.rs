use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    analysis_loaded: bool,
    store_version: u64,
}

/// Health check endpoint
///
/// Always 200 while the process is serving; reports whether an analysis
/// has been published yet.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    let store_version = state.store.version().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        analysis_loaded: store_version > 0,
        store_version,
    })
}
