use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Which chat completion backend the summarizer talks to.
#[derive(Debug, Clone)]
pub enum LlmConfig {
    Azure {
        endpoint: String,
        api_key: String,
        deployment: String,
        api_version: String,
    },
    OpenAI {
        api_key: String,
        model: String,
    },
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub language_endpoint: String,
    pub language_key: String,
    pub language_code: String,
    pub llm: LlmConfig,
    pub collaborator_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let llm = match env::var("AZURE_OPENAI_ENDPOINT") {
            Ok(endpoint) => LlmConfig::Azure {
                endpoint,
                api_key: env::var("AZURE_OPENAI_KEY")
                    .context("AZURE_OPENAI_KEY must be set when AZURE_OPENAI_ENDPOINT is")?,
                deployment: env::var("AZURE_OPENAI_DEPLOYMENT")
                    .context("AZURE_OPENAI_DEPLOYMENT must be set when AZURE_OPENAI_ENDPOINT is")?,
                api_version: env::var("AZURE_OPENAI_API_VERSION")
                    .unwrap_or_else(|_| "2024-02-01".to_string()),
            },
            Err(_) => LlmConfig::OpenAI {
                api_key: env::var("OPENAI_API_KEY")
                    .context("Either AZURE_OPENAI_ENDPOINT or OPENAI_API_KEY must be set")?,
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            },
        };

        let timeout_secs: u64 = env::var("COLLABORATOR_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("COLLABORATOR_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            language_endpoint: env::var("AZURE_LANGUAGE_ENDPOINT")
                .context("AZURE_LANGUAGE_ENDPOINT must be set")?,
            language_key: env::var("AZURE_LANGUAGE_KEY")
                .context("AZURE_LANGUAGE_KEY must be set")?,
            language_code: env::var("LANGUAGE_CODE").unwrap_or_else(|_| "en".to_string()),
            llm,
            collaborator_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
