//! Azure AI Language (Text Analytics v3.1) client.
//!
//! Covers the two operations the return pipeline needs: document sentiment
//! and key phrase extraction. Inputs are split into service-sized batches
//! and results come back in input order. Documents the service rejects are
//! logged and skipped rather than failing the whole call.
//!
//! # Example
//!
//! ```rust,ignore
//! use language_client::TextAnalyticsClient;
//!
//! let client = TextAnalyticsClient::new(endpoint, key);
//! let texts = vec!["Arrived late and the box was crushed".to_string()];
//!
//! let sentiments = client.analyze_sentiment(&texts).await?;
//! let phrases = client.extract_key_phrases(&texts).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{LanguageError, Result};
pub use types::{ConfidenceScores, DocumentError, DocumentKeyPhrases, DocumentSentiment};

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use types::{input_index, BatchResponse, DocumentBatch, TextDocument};

/// Maximum documents per synchronous request.
pub const MAX_BATCH_SIZE: usize = 10;

const API_PATH: &str = "text/analytics/v3.1";

#[derive(Clone)]
pub struct TextAnalyticsClient {
    http_client: Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl TextAnalyticsClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            language: "en".to_string(),
        }
    }

    /// ISO 639-1 language hint sent with every document.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LanguageError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sentiment for each accepted document, in input order.
    pub async fn analyze_sentiment(&self, texts: &[String]) -> Result<Vec<DocumentSentiment>> {
        let mut results = self
            .run_batches::<DocumentSentiment>("sentiment?opinionMining=false", texts)
            .await?;
        results.sort_by_key(|doc| input_index(&doc.id));
        Ok(results)
    }

    /// Key phrases for each accepted document, in input order.
    pub async fn extract_key_phrases(&self, texts: &[String]) -> Result<Vec<DocumentKeyPhrases>> {
        let mut results = self
            .run_batches::<DocumentKeyPhrases>("keyPhrases", texts)
            .await?;
        results.sort_by_key(|doc| input_index(&doc.id));
        Ok(results)
    }

    async fn run_batches<T: DeserializeOwned>(
        &self,
        operation: &str,
        texts: &[String],
    ) -> Result<Vec<T>> {
        let mut results = Vec::with_capacity(texts.len());

        for (chunk_index, chunk) in texts.chunks(MAX_BATCH_SIZE).enumerate() {
            let offset = chunk_index * MAX_BATCH_SIZE;
            let batch = DocumentBatch {
                documents: chunk
                    .iter()
                    .enumerate()
                    .map(|(i, text)| TextDocument {
                        id: (offset + i).to_string(),
                        language: &self.language,
                        text,
                    })
                    .collect(),
            };

            let response: BatchResponse<T> = self.post(operation, &batch).await?;

            for rejected in &response.errors {
                warn!(
                    operation,
                    document_id = %rejected.id,
                    code = %rejected.error.code,
                    message = %rejected.error.message,
                    "Document rejected by language service"
                );
            }

            results.extend(response.documents);
        }

        debug!(operation, documents = texts.len(), "Language analysis complete");
        Ok(results)
    }

    async fn post<T: DeserializeOwned>(
        &self,
        operation: &str,
        batch: &DocumentBatch<'_>,
    ) -> Result<BatchResponse<T>> {
        let url = format!("{}/{}/{}", self.endpoint, API_PATH, operation);

        let response = self
            .http_client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(batch)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, operation, "Language service request failed");
                LanguageError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, operation, "Language service API error");
            return Err(LanguageError::Api(format!(
                "Language service error ({}): {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| LanguageError::Parse(e.to_string()))
    }
}
