//! Conversational copilot over the current analysis.
//!
//! Stateless: each question is answered from the current snapshot and the
//! last derived root causes. No history is kept between calls.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::domains::returns::models::{AnalysisSnapshot, RootCause};
use crate::domains::returns::store::AnalysisStore;
use crate::kernel::BaseAI;

const COPILOT_SYSTEM_PROMPT: &str = r#"You are a returns intelligence copilot for merchandising and operations teams.

Answer the user's question using ONLY the analysis context provided. The context contains:
- analysis: sentiment signals, key phrases and an AI summary of the latest batch of returns (null if nothing has been analyzed yet)
- root_causes: dominant return reasons with supporting evidence phrases

## Rules
- Be concise and concrete; prefer short paragraphs or bullet points
- Cite the relevant root cause or evidence phrase when you make a claim
- If the context is empty or does not cover the question, say so plainly instead of guessing"#;

#[derive(Debug, Serialize)]
struct CopilotContext<'a> {
    analysis: Option<&'a AnalysisSnapshot>,
    root_causes: &'a [RootCause],
}

/// Answer `question` from the store's current contents; the answer is returned verbatim.
pub async fn answer_question(ai: &dyn BaseAI, store: &AnalysisStore, question: &str) -> Result<String> {
    let snapshot = store.snapshot().await;
    let root_causes = store.root_causes().await;

    let context = CopilotContext {
        analysis: snapshot.as_deref(),
        root_causes: &root_causes,
    };
    let context_json =
        serde_json::to_string_pretty(&context).context("Failed to serialize copilot context")?;

    info!(
        question_length = question.len(),
        has_analysis = snapshot.is_some(),
        root_causes = root_causes.len(),
        "Answering copilot question"
    );

    let prompt = format!("Context:\n{}\n\nQuestion: {}", context_json, question);
    ai.complete_with_system(COPILOT_SYSTEM_PROMPT, &prompt)
        .await
        .context("Copilot completion failed")
}
