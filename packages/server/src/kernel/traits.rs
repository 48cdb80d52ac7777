// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to prompt for, and how results are combined, lives in domains/.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseLanguageService)

use anyhow::Result;
use async_trait::async_trait;
use language_client::{DocumentKeyPhrases, DocumentSentiment};

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete a prompt under a system instruction (returns raw text response)
    async fn complete_with_system(&self, system_prompt: &str, prompt: &str) -> Result<String> {
        // Default implementation folds the system prompt into the user prompt
        let combined = format!("{}\n\n{}", system_prompt, prompt);
        self.complete(&combined).await
    }
}

// =============================================================================
// Language Service Trait (Infrastructure - sentiment and key phrases)
// =============================================================================

#[async_trait]
pub trait BaseLanguageService: Send + Sync {
    /// Sentiment per accepted document, in input order
    async fn analyze_sentiment(&self, texts: &[String]) -> Result<Vec<DocumentSentiment>>;

    /// Key phrases per accepted document, in input order
    async fn extract_key_phrases(&self, texts: &[String]) -> Result<Vec<DocumentKeyPhrases>>;
}
