//! Server dependencies for domain activities (using traits for testability)
//!
//! Both external AI collaborators sit behind trait objects so tests can
//! swap in the mocks from `test_dependencies`.

use anyhow::{Context, Result};
use language_client::TextAnalyticsClient;
use openai_client::OpenAIClient;
use std::sync::Arc;

use crate::config::{Config, LlmConfig};
use crate::kernel::{BaseAI, BaseLanguageService, ChatCompletionAI};

/// Server dependencies accessible to activities
#[derive(Clone)]
pub struct ServerDeps {
    /// Summarization engine (dominant reasons, copilot answers)
    pub ai: Arc<dyn BaseAI>,
    /// Sentiment and key phrase extractor
    pub language: Arc<dyn BaseLanguageService>,
}

impl ServerDeps {
    pub fn new(ai: Arc<dyn BaseAI>, language: Arc<dyn BaseLanguageService>) -> Self {
        Self { ai, language }
    }

    /// Build the real collaborator clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let (client, model) = match &config.llm {
            LlmConfig::Azure {
                endpoint,
                api_key,
                deployment,
                api_version,
            } => (
                OpenAIClient::azure(endpoint, api_key, deployment, api_version),
                String::new(),
            ),
            LlmConfig::OpenAI { api_key, model } => (OpenAIClient::new(api_key), model.clone()),
        };
        let client = client
            .with_timeout(config.collaborator_timeout)
            .context("Failed to configure chat completion client")?;

        let language = TextAnalyticsClient::new(&config.language_endpoint, &config.language_key)
            .with_language(&config.language_code)
            .with_timeout(config.collaborator_timeout)
            .context("Failed to configure language client")?;

        Ok(Self::new(
            Arc::new(ChatCompletionAI::new(client, model)),
            Arc::new(language),
        ))
    }
}
