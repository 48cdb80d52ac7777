// AI implementation using the chat completion client
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::BaseAI;

/// Chat completion backed implementation of AI capabilities
#[derive(Clone)]
pub struct ChatCompletionAI {
    client: OpenAIClient,
    /// Empty for Azure deployments, where the deployment picks the model
    model: String,
}

impl ChatCompletionAI {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    async fn send(&self, request: ChatRequest) -> Result<String> {
        tracing::debug!(
            model = %self.model,
            messages = request.messages.len(),
            "Calling chat completion API"
        );

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "Chat completion failed");
                anyhow::anyhow!("{}", e)
            })
            .context("Failed to call chat completion API")?;

        if let Some(usage) = &response.usage {
            tracing::info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion response received"
            );
        }

        Ok(response.content)
    }
}

#[async_trait]
impl BaseAI for ChatCompletionAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(self.model.clone())
            .message(Message::user(prompt))
            .temperature(0.2);
        self.send(request).await
    }

    async fn complete_with_system(&self, system_prompt: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(self.model.clone())
            .message(Message::system(system_prompt))
            .message(Message::user(prompt))
            .temperature(0.2);
        self.send(request).await
    }
}
