use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::LanguageSignals;

/// Output of the summarization engine.
///
/// Normally text that should hold a JSON object; an already-parsed object
/// is accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisSummary {
    Structured(Map<String, Value>),
    Text(String),
}

impl Default for AnalysisSummary {
    fn default() -> Self {
        AnalysisSummary::Text(String::new())
    }
}

/// How a call to one external collaborator went.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CollaboratorStatus {
    Ok,
    /// Nothing to send, so the collaborator was not called
    Skipped,
    /// The call failed and an empty default was used in its place
    Degraded { error: String },
}

impl CollaboratorStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, CollaboratorStatus::Degraded { .. })
    }
}

/// Per-collaborator outcome of one analyze call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStatus {
    pub language: CollaboratorStatus,
    pub summary: CollaboratorStatus,
}

impl AnalysisStatus {
    /// Human-readable warnings for every degraded collaborator.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let CollaboratorStatus::Degraded { error } = &self.language {
            warnings.push(format!("language analysis unavailable: {}", error));
        }
        if let CollaboratorStatus::Degraded { error } = &self.summary {
            warnings.push(format!("summary unavailable: {}", error));
        }
        warnings
    }
}

/// Everything one analyze call produced. Immutable once published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// Monotonic, assigned when the analyze request arrived
    pub version: u64,
    pub analyzed_at: DateTime<Utc>,
    pub language_signals: LanguageSignals,
    pub analysis_summary: AnalysisSummary,
    pub total_returns: usize,
    pub status: AnalysisStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_deserializes_text_and_objects() {
        let text: AnalysisSummary = serde_json::from_value(json!("```json\n{}\n```")).unwrap();
        let structured: AnalysisSummary =
            serde_json::from_value(json!({"dominant_reasons": ["late"]})).unwrap();

        assert!(matches!(text, AnalysisSummary::Text(_)));
        assert!(matches!(structured, AnalysisSummary::Structured(_)));
    }

    #[test]
    fn degraded_status_serializes_with_error() {
        let status = CollaboratorStatus::Degraded {
            error: "timeout".into(),
        };

        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({"state": "degraded", "error": "timeout"})
        );
        assert_eq!(
            serde_json::to_value(CollaboratorStatus::Skipped).unwrap(),
            json!({"state": "skipped"})
        );
    }

    #[test]
    fn warnings_list_only_degraded_collaborators() {
        let status = AnalysisStatus {
            language: CollaboratorStatus::Skipped,
            summary: CollaboratorStatus::Degraded {
                error: "429".into(),
            },
        };

        assert_eq!(status.warnings(), vec!["summary unavailable: 429".to_string()]);
    }
}
