use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::Deserialize;

use crate::domains::returns::models::SustainabilityMetrics;
use crate::server::error::ApiError;

const DEFAULT_RETURNS_AVOIDED: i64 = 800;

#[derive(Debug, Deserialize)]
pub struct SustainabilityQuery {
    returns_avoided: Option<i64>,
}

/// GET /sustainability/?returns_avoided=N
pub async fn sustainability_handler(
    query: Result<Query<SustainabilityQuery>, QueryRejection>,
) -> Result<Json<SustainabilityMetrics>, ApiError> {
    let Query(query) = query?;
    Ok(Json(SustainabilityMetrics::project(
        query.returns_avoided.unwrap_or(DEFAULT_RETURNS_AVOIDED),
    )))
}
