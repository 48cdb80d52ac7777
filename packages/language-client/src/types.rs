//! Text Analytics request and response types.

use serde::{Deserialize, Serialize};

/// One input document.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TextDocument<'a> {
    pub id: String,
    pub language: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DocumentBatch<'a> {
    pub documents: Vec<TextDocument<'a>>,
}

/// Per-label confidence scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Sentiment result for one document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSentiment {
    pub id: String,
    /// "positive", "neutral", "negative" or "mixed"
    pub sentiment: String,
    pub confidence_scores: ConfidenceScores,
}

/// Key phrases extracted from one document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentKeyPhrases {
    pub id: String,
    pub key_phrases: Vec<String>,
}

/// A document the service rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentError {
    pub id: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchResponse<T> {
    #[serde(default = "Vec::new")]
    pub documents: Vec<T>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
}

/// Position of a document within the caller's input, recovered from its id.
pub(crate) fn input_index(id: &str) -> usize {
    id.parse().unwrap_or(usize::MAX)
}
