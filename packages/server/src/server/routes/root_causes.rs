use axum::{body::Bytes, extract::Extension, Json};
use serde::Serialize;
use serde_json::Value;

use crate::domains::returns::activities::{analyze_returns, derive_root_causes};
use crate::domains::returns::models::{ReturnsPayload, RootCause};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Debug, Serialize)]
pub struct RootCausesResponse {
    pub root_causes: Vec<RootCause>,
}

/// POST /root-causes (alias /root_causes)
///
/// Without a body, derives from the current analysis. A body of returns
/// (either accepted shape) is analyzed first.
pub async fn root_causes_handler(
    Extension(state): Extension<AxumAppState>,
    body: Bytes,
) -> Result<Json<RootCausesResponse>, ApiError> {
    if let Some(payload) = parse_optional_returns(&body)? {
        analyze_returns(&state.deps, &state.store, payload.into_records()).await;
    }

    let snapshot = state.store.snapshot().await;
    let root_causes = derive_root_causes(snapshot.as_deref(), state.matcher.as_ref());

    if let Some(snapshot) = &snapshot {
        state
            .store
            .remember_root_causes(snapshot.version, root_causes.clone())
            .await;
    }

    tracing::debug!(count = root_causes.len(), "Derived root causes");
    Ok(Json(RootCausesResponse { root_causes }))
}

/// Empty, `null` and `{}` bodies mean "use current state".
fn parse_optional_returns(body: &[u8]) -> Result<Option<ReturnsPayload>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    match &value {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        _ => serde_json::from_value(value)
            .map(Some)
            .map_err(|_| {
                ApiError::BadRequest(
                    "Expected {\"returns\": [...]} or an array of return records".to_string(),
                )
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_bodies_mean_current_state() {
        for body in ["", "  \n", "null", "{}"] {
            assert!(parse_optional_returns(body.as_bytes()).unwrap().is_none());
        }
    }

    #[test]
    fn returns_bodies_are_parsed() {
        let wrapped = parse_optional_returns(br#"{"returns": [{"reason": "late"}]}"#).unwrap();
        let bare = parse_optional_returns(br#"[{"reason": "late"}]"#).unwrap();

        assert_eq!(wrapped.unwrap().into_records().len(), 1);
        assert_eq!(bare.unwrap().into_records().len(), 1);
    }

    #[test]
    fn other_bodies_are_rejected() {
        assert!(parse_optional_returns(b"{not json").is_err());
        assert!(parse_optional_returns(br#"{"question": "hi"}"#).is_err());
        assert!(parse_optional_returns(b"42").is_err());
    }
}
