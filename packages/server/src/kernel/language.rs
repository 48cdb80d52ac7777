// Language service implementation using the Text Analytics client

use anyhow::Result;
use async_trait::async_trait;
use language_client::{DocumentKeyPhrases, DocumentSentiment, TextAnalyticsClient};

use super::BaseLanguageService;

#[async_trait]
impl BaseLanguageService for TextAnalyticsClient {
    async fn analyze_sentiment(&self, texts: &[String]) -> Result<Vec<DocumentSentiment>> {
        Ok(TextAnalyticsClient::analyze_sentiment(self, texts).await?)
    }

    async fn extract_key_phrases(&self, texts: &[String]) -> Result<Vec<DocumentKeyPhrases>> {
        Ok(TextAnalyticsClient::extract_key_phrases(self, texts).await?)
    }
}
