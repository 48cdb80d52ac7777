use axum::{
    extract::{rejection::JsonRejection, Extension, Multipart},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::domains::returns::activities::{analyze_returns, load_returns_csv, AnalyzeOutcome};
use crate::domains::returns::models::{AnalysisSnapshot, ReturnsPayload};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    pub analysis: Arc<AnalysisSnapshot>,
    /// One entry per degraded collaborator; empty when everything worked
    pub warnings: Vec<String>,
}

impl From<AnalyzeOutcome> for AnalyzeResponse {
    fn from(outcome: AnalyzeOutcome) -> Self {
        Self {
            status: "ok",
            warnings: outcome.warnings(),
            analysis: outcome.snapshot,
        }
    }
}

/// POST /analyze
///
/// Body: `{"returns": [...]}` or a bare array of return records.
pub async fn analyze_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<ReturnsPayload>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(payload) = payload?;
    let outcome = analyze_returns(&state.deps, &state.store, payload.into_records()).await;
    Ok(Json(outcome.into()))
}

/// POST /analyze/csv
///
/// Multipart upload with the CSV export in a `file` field.
pub async fn analyze_csv_handler(
    Extension(state): Extension<AxumAppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
            upload = Some(bytes);
            break;
        }
    }

    let bytes = upload.ok_or_else(|| ApiError::BadRequest("Missing `file` field".to_string()))?;
    let records = load_returns_csv(bytes.as_ref())?;

    let outcome = analyze_returns(&state.deps, &state.store, records).await;
    Ok(Json(outcome.into()))
}
