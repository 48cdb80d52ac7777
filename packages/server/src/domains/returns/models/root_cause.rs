use serde::{Deserialize, Serialize};

/// Confidence in a root cause. Only `high` is produced today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
}

/// Workflow status of a root cause. Only `open` is produced today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootCauseStatus {
    Open,
}

/// Share of each sentiment label, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

/// A dominant return reason linked to supporting key phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootCause {
    pub reason: String,
    pub confidence: Confidence,
    pub status: RootCauseStatus,
    /// At most five phrases
    pub evidence: Vec<String>,
    /// Batch-wide, identical across all root causes of one derivation
    pub sentiment_breakdown: SentimentBreakdown,
}
