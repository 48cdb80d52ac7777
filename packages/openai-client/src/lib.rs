//! Minimal chat completion client for OpenAI and Azure OpenAI.
//!
//! No domain-specific logic lives here: callers build prompts, this crate
//! ships them and hands back the raw completion text.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, ChatRequest, Message};
//!
//! let client = OpenAIClient::azure(
//!     "https://my-resource.openai.azure.com",
//!     api_key,
//!     "gpt-4o-mini",
//!     "2024-02-01",
//! );
//!
//! let response = client
//!     .chat_completion(ChatRequest::default().message(Message::user("Hello!")))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Where requests are sent and how they authenticate.
#[derive(Debug, Clone, PartialEq)]
pub enum Provider {
    /// OpenAI-compatible API with `Authorization: Bearer` auth.
    OpenAI { base_url: String },
    /// Azure OpenAI deployment with `api-key` header auth.
    Azure {
        endpoint: String,
        deployment: String,
        api_version: String,
    },
}

/// Chat completion client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    provider: Provider,
}

impl OpenAIClient {
    /// Create a client for the public OpenAI API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            provider: Provider::OpenAI {
                base_url: OPENAI_BASE_URL.to_string(),
            },
        }
    }

    /// Create a client for an Azure OpenAI deployment.
    pub fn azure(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            provider: Provider::Azure {
                endpoint: endpoint.into().trim_end_matches('/').to_string(),
                deployment: deployment.into(),
                api_version: api_version.into(),
            },
        }
    }

    /// Set a custom base URL (proxies, local gateways).
    ///
    /// Has no effect on Azure clients, whose URL comes from the endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        if let Provider::OpenAI { base_url } = &mut self.provider {
            *base_url = url.into().trim_end_matches('/').to_string();
        }
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OpenAIError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Full URL of the chat completions endpoint.
    pub fn chat_completions_url(&self) -> String {
        match &self.provider {
            Provider::OpenAI { base_url } => format!("{}/chat/completions", base_url),
            Provider::Azure {
                endpoint,
                deployment,
                api_version,
            } => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint, deployment, api_version
            ),
        }
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.provider {
            Provider::OpenAI { .. } => {
                builder.header("Authorization", format!("Bearer {}", self.api_key))
            }
            Provider::Azure { .. } => builder.header("api-key", &self.api_key),
        }
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and get the first choice back.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .authorize(self.http_client.post(self.chat_completions_url()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Chat completion API error");
            return Err(OpenAIError::Api(format!(
                "Chat completion API error ({}): {}",
                status, error_text
            )));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OpenAIError::Api("No choices in completion response".into()))?;

        let content = choice.message.content.ok_or_else(|| {
            OpenAIError::Api(format!(
                "Completion returned no content (finish_reason: {})",
                choice.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })?;

        debug!(
            duration_ms = start.elapsed().as_millis(),
            content_length = content.len(),
            "Chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }
}
