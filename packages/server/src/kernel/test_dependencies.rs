// Test dependencies - mock implementations for testing
//
// Provides mock collaborators that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use language_client::{ConfidenceScores, DocumentKeyPhrases, DocumentSentiment};
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseLanguageService, ServerDeps};

// =============================================================================
// Mock AI (Generic LLM capabilities)
// =============================================================================

/// A prompt as the mock received it
#[derive(Debug, Clone)]
pub struct AICall {
    pub system_prompt: Option<String>,
    pub prompt: String,
}

pub struct MockAI {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<AICall>>>,
    failure: Option<String>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    /// Add a JSON response to the queue (will be serialized)
    pub fn with_json_response<T: serde::Serialize>(self, data: &T) -> Self {
        let json = serde_json::to_string(data).expect("Failed to serialize mock response");
        self.responses.lock().unwrap().push(json);
        self
    }

    /// Make every call fail with the given message
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Get all calls that were sent to the AI
    pub fn calls(&self) -> Vec<AICall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|c| c.prompt.clone())
    }

    /// Check if a prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.prompt.contains(text))
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, system_prompt: Option<&str>, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(AICall {
            system_prompt: system_prompt.map(str::to_string),
            prompt: prompt.to_string(),
        });

        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            Ok("Mock AI response".to_string())
        }
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.record(None, prompt)
    }

    async fn complete_with_system(&self, system_prompt: &str, prompt: &str) -> Result<String> {
        self.record(Some(system_prompt), prompt)
    }
}

// =============================================================================
// Mock Language Service
// =============================================================================

/// Canned per-text result for the mock language service
#[derive(Debug, Clone)]
struct CannedDocument {
    sentiment: String,
    key_phrases: Vec<String>,
}

pub struct MockLanguageService {
    documents: Arc<Mutex<Vec<CannedDocument>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    failure: Option<String>,
}

impl MockLanguageService {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Queue the result for the next input text (consumed in input order)
    pub fn with_document(self, sentiment: &str, key_phrases: &[&str]) -> Self {
        self.documents.lock().unwrap().push(CannedDocument {
            sentiment: sentiment.to_string(),
            key_phrases: key_phrases.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    /// Make every call fail with the given message
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Text batches passed to sentiment analysis
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn canned(&self, index: usize) -> CannedDocument {
        self.documents
            .lock()
            .unwrap()
            .get(index)
            .cloned()
            .unwrap_or_else(|| CannedDocument {
                sentiment: "neutral".to_string(),
                key_phrases: Vec::new(),
            })
    }
}

impl Default for MockLanguageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseLanguageService for MockLanguageService {
    async fn analyze_sentiment(&self, texts: &[String]) -> Result<Vec<DocumentSentiment>> {
        self.calls.lock().unwrap().push(texts.to_vec());

        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        Ok((0..texts.len())
            .map(|i| {
                let canned = self.canned(i);
                let confidence_scores = match canned.sentiment.as_str() {
                    "positive" => ConfidenceScores { positive: 0.9, neutral: 0.08, negative: 0.02 },
                    "negative" => ConfidenceScores { positive: 0.02, neutral: 0.08, negative: 0.9 },
                    _ => ConfidenceScores { positive: 0.1, neutral: 0.8, negative: 0.1 },
                };
                DocumentSentiment {
                    id: i.to_string(),
                    sentiment: canned.sentiment,
                    confidence_scores,
                }
            })
            .collect())
    }

    async fn extract_key_phrases(&self, texts: &[String]) -> Result<Vec<DocumentKeyPhrases>> {
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        Ok((0..texts.len())
            .map(|i| DocumentKeyPhrases {
                id: i.to_string(),
                key_phrases: self.canned(i).key_phrases,
            })
            .collect())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks with handles kept for assertions
pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub language: Arc<MockLanguageService>,
}

impl TestDependencies {
    pub fn new(ai: MockAI, language: MockLanguageService) -> Self {
        Self {
            ai: Arc::new(ai),
            language: Arc::new(language),
        }
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.ai.clone(), self.language.clone())
    }
}
