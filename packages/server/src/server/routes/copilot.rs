use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domains::returns::activities::answer_question;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// Any client-side `context` field is ignored; server state is authoritative.
#[derive(Debug, Deserialize)]
pub struct CopilotRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct CopilotResponse {
    pub answer: String,
}

/// POST /copilot
pub async fn copilot_handler(
    Extension(state): Extension<AxumAppState>,
    request: Result<Json<CopilotRequest>, JsonRejection>,
) -> Result<Json<CopilotResponse>, ApiError> {
    let Json(request) = request?;
    let answer = answer_question(state.deps.ai.as_ref(), &state.store, &request.question)
        .await
        .map_err(|e| ApiError::Upstream(format!("{:#}", e)))?;

    Ok(Json(CopilotResponse { answer }))
}
