//! Root-cause derivation.
//!
//! Links each dominant reason from the summary to the key phrases that
//! mention it and attaches the batch-wide sentiment breakdown. Pure: reads
//! a snapshot, never calls a collaborator.

use serde_json::{Map, Value};
use tracing::debug;

use crate::domains::returns::matching::EvidenceMatcher;
use crate::domains::returns::models::{
    AnalysisSnapshot, AnalysisSummary, Confidence, RootCause, RootCauseStatus, Sentiment,
    SentimentBreakdown, SentimentEntry,
};
use openai_client::strip_code_blocks;

/// Maximum evidence phrases attached to one root cause.
pub const MAX_EVIDENCE: usize = 5;

/// Derive root causes from the current snapshot, in summary order.
///
/// No snapshot, an unparseable summary, or a summary without
/// `dominant_reasons` all yield an empty list.
pub fn derive_root_causes(
    snapshot: Option<&AnalysisSnapshot>,
    matcher: &dyn EvidenceMatcher,
) -> Vec<RootCause> {
    let Some(snapshot) = snapshot else {
        return Vec::new();
    };

    let summary = parse_summary(&snapshot.analysis_summary);
    let reasons = dominant_reasons(&summary);
    if reasons.is_empty() {
        debug!(version = snapshot.version, "No dominant reasons in summary");
        return Vec::new();
    }

    let key_phrases = &snapshot.language_signals.key_phrases;
    let breakdown = sentiment_breakdown(&snapshot.language_signals.sentiments);

    reasons
        .into_iter()
        .map(|reason| {
            let evidence = key_phrases
                .iter()
                .filter(|phrase| matcher.is_related(&reason, phrase))
                .take(MAX_EVIDENCE)
                .cloned()
                .collect();

            RootCause {
                reason,
                confidence: Confidence::High,
                status: RootCauseStatus::Open,
                evidence,
                sentiment_breakdown: breakdown,
            }
        })
        .collect()
}

/// Parse the summary into a JSON object; anything unparseable becomes empty.
pub fn parse_summary(summary: &AnalysisSummary) -> Map<String, Value> {
    match summary {
        AnalysisSummary::Structured(map) => map.clone(),
        AnalysisSummary::Text(text) => {
            match serde_json::from_str::<Value>(strip_code_blocks(text)) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    debug!("Summary JSON is not an object");
                    Map::new()
                }
                Err(e) => {
                    debug!(error = %e, "Summary is not valid JSON");
                    Map::new()
                }
            }
        }
    }
}

/// String entries of `dominant_reasons`, in order.
pub fn dominant_reasons(summary: &Map<String, Value>) -> Vec<String> {
    summary
        .get("dominant_reasons")
        .and_then(Value::as_array)
        .map(|reasons| {
            reasons
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Share of negative / neutral / positive labels.
///
/// `mixed` entries are not part of the denominator, so the three shares sum
/// to 1 whenever at least one labelled entry exists and are all 0 otherwise.
pub fn sentiment_breakdown(sentiments: &[SentimentEntry]) -> SentimentBreakdown {
    let (mut negative, mut neutral, mut positive) = (0usize, 0usize, 0usize);
    for entry in sentiments {
        match entry.sentiment {
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => neutral += 1,
            Sentiment::Positive => positive += 1,
            Sentiment::Mixed => {}
        }
    }

    let total = (negative + neutral + positive).max(1) as f64;
    SentimentBreakdown {
        negative: negative as f64 / total,
        neutral: neutral as f64 / total,
        positive: positive as f64 / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::returns::matching::WordOverlapMatcher;
    use crate::domains::returns::models::{
        AnalysisStatus, CollaboratorStatus, LanguageSignals,
    };

    fn snapshot(summary: AnalysisSummary, phrases: &[&str], labels: &[Sentiment]) -> AnalysisSnapshot {
        AnalysisSnapshot {
            version: 1,
            analyzed_at: chrono::Utc::now(),
            language_signals: LanguageSignals {
                sentiments: labels.iter().map(|s| SentimentEntry::new(*s)).collect(),
                key_phrases: phrases.iter().map(|p| p.to_string()).collect(),
            },
            analysis_summary: summary,
            total_returns: labels.len(),
            status: AnalysisStatus {
                language: CollaboratorStatus::Ok,
                summary: CollaboratorStatus::Ok,
            },
        }
    }

    fn text(s: &str) -> AnalysisSummary {
        AnalysisSummary::Text(s.to_string())
    }

    #[test]
    fn no_snapshot_yields_nothing() {
        assert!(derive_root_causes(None, &WordOverlapMatcher).is_empty());
    }

    #[test]
    fn damaged_packaging_scenario() {
        let snap = snapshot(
            text(r#"{"dominant_reasons": ["damaged packaging"]}"#),
            &["packaging issue", "wrong size"],
            &[Sentiment::Negative, Sentiment::Negative, Sentiment::Positive],
        );

        let causes = derive_root_causes(Some(&snap), &WordOverlapMatcher);

        assert_eq!(causes.len(), 1);
        let cause = &causes[0];
        assert_eq!(cause.reason, "damaged packaging");
        assert_eq!(cause.evidence, vec!["packaging issue"]);
        assert_eq!(cause.confidence, Confidence::High);
        assert_eq!(cause.status, RootCauseStatus::Open);
        assert!((cause.sentiment_breakdown.negative - 0.667).abs() < 0.01);
        assert_eq!(cause.sentiment_breakdown.neutral, 0.0);
        assert!((cause.sentiment_breakdown.positive - 0.333).abs() < 0.01);
    }

    #[test]
    fn missing_or_empty_dominant_reasons_yield_nothing() {
        for summary in [
            text("{}"),
            text(r#"{"dominant_reasons": []}"#),
            text(r#"{"summary": "mostly sizing"}"#),
            AnalysisSummary::default(),
        ] {
            let snap = snapshot(summary, &["size"], &[Sentiment::Negative]);
            assert!(derive_root_causes(Some(&snap), &WordOverlapMatcher).is_empty());
        }
    }

    #[test]
    fn malformed_summary_is_not_an_error() {
        let snap = snapshot(text("```json{bad"), &["anything"], &[]);
        assert!(derive_root_causes(Some(&snap), &WordOverlapMatcher).is_empty());

        let snap = snapshot(text(r#"["late delivery"]"#), &["late"], &[]);
        assert!(derive_root_causes(Some(&snap), &WordOverlapMatcher).is_empty());
    }

    #[test]
    fn fenced_and_structured_summaries_both_work() {
        let fenced = snapshot(
            text("```json\n{\"dominant_reasons\": [\"late delivery\"]}\n```"),
            &[],
            &[],
        );
        let mut map = Map::new();
        map.insert("dominant_reasons".into(), serde_json::json!(["late delivery"]));
        let structured = snapshot(AnalysisSummary::Structured(map), &[], &[]);

        assert_eq!(derive_root_causes(Some(&fenced), &WordOverlapMatcher)[0].reason, "late delivery");
        assert_eq!(derive_root_causes(Some(&structured), &WordOverlapMatcher)[0].reason, "late delivery");
    }

    #[test]
    fn preserves_reason_order_and_shares_breakdown() {
        let snap = snapshot(
            text(r#"{"dominant_reasons": ["wrong size", "late delivery", 42, "color mismatch"]}"#),
            &["size chart", "delivery was LATE"],
            &[Sentiment::Neutral],
        );

        let causes = derive_root_causes(Some(&snap), &WordOverlapMatcher);
        let reasons: Vec<_> = causes.iter().map(|c| c.reason.as_str()).collect();

        assert_eq!(reasons, vec!["wrong size", "late delivery", "color mismatch"]);
        assert_eq!(causes[1].evidence, vec!["delivery was LATE"]);
        assert!(causes[2].evidence.is_empty());
        assert!(causes.iter().all(|c| c.sentiment_breakdown == causes[0].sentiment_breakdown));
    }

    #[test]
    fn evidence_is_capped_at_five_in_phrase_order() {
        let phrases = ["size 1", "size 2", "size 3", "size 4", "size 5", "size 6"];
        let snap = snapshot(text(r#"{"dominant_reasons": ["size"]}"#), &phrases, &[]);

        let causes = derive_root_causes(Some(&snap), &WordOverlapMatcher);

        assert_eq!(causes[0].evidence, phrases[..MAX_EVIDENCE].to_vec());
    }

    #[test]
    fn breakdown_is_count_over_total() {
        let cases = [(1, 0, 0), (2, 1, 1), (0, 3, 0), (5, 7, 11)];
        for (n, z, p) in cases {
            let mut entries = Vec::new();
            entries.extend(std::iter::repeat(SentimentEntry::new(Sentiment::Negative)).take(n));
            entries.extend(std::iter::repeat(SentimentEntry::new(Sentiment::Neutral)).take(z));
            entries.extend(std::iter::repeat(SentimentEntry::new(Sentiment::Positive)).take(p));
            let total = (n + z + p) as f64;

            let b = sentiment_breakdown(&entries);

            assert!((b.negative + b.neutral + b.positive - 1.0).abs() < 1e-9);
            assert!((b.negative - n as f64 / total).abs() < 1e-9);
            assert!((b.neutral - z as f64 / total).abs() < 1e-9);
            assert!((b.positive - p as f64 / total).abs() < 1e-9);
        }
    }

    #[test]
    fn breakdown_without_entries_is_all_zero() {
        assert_eq!(sentiment_breakdown(&[]), SentimentBreakdown::default());
        assert_eq!(
            sentiment_breakdown(&[SentimentEntry::new(Sentiment::Mixed)]),
            SentimentBreakdown::default()
        );
    }
}
