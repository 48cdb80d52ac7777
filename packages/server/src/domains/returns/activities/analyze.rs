//! Analyze a batch of returns with both AI collaborators.
//!
//! Pipeline: reasons → language signals (sentiment + key phrases),
//! records → summary (dominant reasons), then publish one snapshot.
//! Collaborator failures degrade to empty results and are reported in the
//! snapshot status instead of failing the request.

use std::sync::Arc;

use anyhow::Result;
use openai_client::strip_code_blocks;
use tracing::{info, warn};

use crate::domains::returns::models::{
    AnalysisSnapshot, AnalysisStatus, AnalysisSummary, CollaboratorStatus, LanguageSignals,
    ReturnRecord, Sentiment, SentimentEntry,
};
use crate::domains::returns::store::AnalysisStore;
use crate::kernel::{BaseAI, BaseLanguageService, ServerDeps};

// =============================================================================
// LLM Prompt
// =============================================================================

const SUMMARY_SYSTEM_PROMPT: &str = r#"You are a returns analyst for an e-commerce retailer.

You receive a JSON array of return records. Each record may include a SKU, a product category and a free-text return reason.

Identify the dominant reasons customers return products.

## Output
Respond with a single JSON object and nothing else:
{
  "dominant_reasons": ["short reason", "..."],
  "summary": "two or three sentences describing the overall pattern",
  "recommendations": ["concrete fix", "..."]
}

## Rules
- Order dominant_reasons from most to least frequent
- Each dominant reason is a short phrase (2-6 words) using the customers' own vocabulary
- Return at most 5 dominant reasons
- If there are no records, return empty arrays and an empty summary"#;

/// Result of one analyze call.
#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    pub snapshot: Arc<AnalysisSnapshot>,
    /// False when a newer analyze request published first
    pub published: bool,
}

impl AnalyzeOutcome {
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = self.snapshot.status.warnings();
        if !self.published {
            warnings.push("analysis superseded by a newer request".to_string());
        }
        warnings
    }
}

/// Run both collaborators over `records` and publish the combined result.
pub async fn analyze_returns(
    deps: &ServerDeps,
    store: &AnalysisStore,
    records: Vec<ReturnRecord>,
) -> AnalyzeOutcome {
    let version = store.reserve_version();

    let texts: Vec<String> = records
        .iter()
        .filter_map(|r| r.reason())
        .map(str::to_string)
        .collect();

    info!(
        version,
        records = records.len(),
        texts = texts.len(),
        "Analyzing returns"
    );

    let (language_signals, language_status) = if texts.is_empty() {
        (LanguageSignals::empty(), CollaboratorStatus::Skipped)
    } else {
        match extract_language_signals(deps.language.as_ref(), &texts).await {
            Ok(signals) => (signals, CollaboratorStatus::Ok),
            Err(e) => {
                warn!(error = %e, version, "Language analysis failed, continuing without signals");
                (
                    LanguageSignals::empty(),
                    CollaboratorStatus::Degraded {
                        error: e.to_string(),
                    },
                )
            }
        }
    };

    let (analysis_summary, summary_status) =
        match summarize_returns(deps.ai.as_ref(), &records).await {
            Ok(text) => (AnalysisSummary::Text(text), CollaboratorStatus::Ok),
            Err(e) => {
                warn!(error = %e, version, "Summary generation failed, continuing without summary");
                (
                    AnalysisSummary::default(),
                    CollaboratorStatus::Degraded {
                        error: e.to_string(),
                    },
                )
            }
        };

    let snapshot = AnalysisSnapshot {
        version,
        analyzed_at: chrono::Utc::now(),
        language_signals,
        analysis_summary,
        total_returns: records.len(),
        status: AnalysisStatus {
            language: language_status,
            summary: summary_status,
        },
    };

    let published = store.publish(snapshot.clone()).await;

    AnalyzeOutcome {
        snapshot: Arc::new(snapshot),
        published,
    }
}

/// Sentiment and deduplicated key phrases for the given reason texts.
pub async fn extract_language_signals(
    language: &dyn BaseLanguageService,
    texts: &[String],
) -> Result<LanguageSignals> {
    let documents = language.analyze_sentiment(texts).await?;

    let sentiments = documents
        .into_iter()
        .filter_map(|doc| match Sentiment::from_label(&doc.sentiment) {
            Some(sentiment) => {
                let scores = doc.confidence_scores;
                let mut entry = SentimentEntry::new(sentiment);
                entry.confidence.insert("positive".into(), scores.positive);
                entry.confidence.insert("neutral".into(), scores.neutral);
                entry.confidence.insert("negative".into(), scores.negative);
                Some(entry)
            }
            None => {
                warn!(label = %doc.sentiment, "Ignoring unknown sentiment label");
                None
            }
        })
        .collect();

    let phrases = language.extract_key_phrases(texts).await?;

    Ok(LanguageSignals::with_phrases(
        sentiments,
        phrases.into_iter().map(|doc| doc.key_phrases),
    ))
}

/// Ask the summarization engine for dominant reasons; code fences stripped.
pub async fn summarize_returns(ai: &dyn BaseAI, records: &[ReturnRecord]) -> Result<String> {
    let records_json = serde_json::to_string_pretty(records)?;
    let prompt = format!("Return records:\n{}", records_json);

    let raw = ai.complete_with_system(SUMMARY_SYSTEM_PROMPT, &prompt).await?;
    Ok(strip_code_blocks(&raw).to_string())
}
