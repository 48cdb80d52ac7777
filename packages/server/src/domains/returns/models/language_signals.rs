use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Document-level sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
    /// Reported by the language service when a text mixes polarities
    Mixed,
}

impl Sentiment {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "positive" => Some(Sentiment::Positive),
            "mixed" => Some(Sentiment::Mixed),
            _ => None,
        }
    }
}

/// Sentiment of one return reason text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentEntry {
    pub sentiment: Sentiment,
    /// Label → score
    #[serde(default)]
    pub confidence: BTreeMap<String, f64>,
}

impl SentimentEntry {
    pub fn new(sentiment: Sentiment) -> Self {
        Self {
            sentiment,
            confidence: BTreeMap::new(),
        }
    }
}

/// Signals extracted from the free-text reasons of one batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageSignals {
    #[serde(default)]
    pub sentiments: Vec<SentimentEntry>,
    /// Distinct phrases (case-sensitive), first-seen order
    #[serde(default)]
    pub key_phrases: Vec<String>,
}

impl LanguageSignals {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from per-document phrase lists, dropping duplicates.
    pub fn with_phrases<I, P>(sentiments: Vec<SentimentEntry>, phrase_lists: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let key_phrases = phrase_lists
            .into_iter()
            .flatten()
            .filter(|phrase| seen.insert(phrase.clone()))
            .collect();

        Self {
            sentiments,
            key_phrases,
        }
    }
}
