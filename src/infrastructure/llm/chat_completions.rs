//! Chat-completions client for the generative summary path.
//!
//! Targets an OpenAI-style `/v1/chat/completions` endpoint. Request building
//! and completion extraction are plain functions over serde structs so they
//! test without HTTP.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::summary::Summary;
use crate::generation::errors::{GenerationError, GenerationResult};
use crate::generation::generator::SummaryGenerator;
use crate::generation::prompts;
use crate::generation::response::parse_summary;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Environment-sourced settings for the chat API
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl GenerationConfig {
    /// Reads configuration from the environment
    ///
    /// Returns `None` when `SUMMARY_API_KEY` is unset, which disables the
    /// generative route without failing startup. Base URL and model fall back
    /// to defaults when their variables are absent.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("SUMMARY_API_KEY").ok()?;
        let api_base =
            std::env::var("SUMMARY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model = std::env::var("SUMMARY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Some(Self {
            api_key,
            api_base,
            model,
        })
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Chat completions request body
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

/// A message in chat format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat completions response body
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// A response choice
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

/// Assistant message from the API
#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: Option<String>,
}

/// Builds the chat request carrying the summary prompt
pub fn build_request(config: &GenerationConfig, strengths: &str, weaknesses: &str) -> ChatRequest {
    let prompt = prompts::library::leadership_summary();

    let mut variables = HashMap::new();
    variables.insert("strengths".to_string(), strengths.to_string());
    variables.insert("weaknesses".to_string(), weaknesses.to_string());

    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: prompt.system.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: prompt.render(&variables),
            },
        ],
        temperature: DEFAULT_TEMPERATURE,
    }
}

/// Extracts the completion text from a chat response
pub fn extract_completion(response: ChatResponse) -> GenerationResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(GenerationError::EmptyCompletion)
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Summary generator backed by a hosted chat-completions API
pub struct ChatCompletionsGenerator {
    config: GenerationConfig,
    client: reqwest::Client,
}

impl ChatCompletionsGenerator {
    /// Creates a generator with the given configuration
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SummaryGenerator for ChatCompletionsGenerator {
    async fn generate(&self, strengths: &str, weaknesses: &str) -> GenerationResult<Summary> {
        let request = build_request(&self.config, strengths, weaknesses);

        let response = self
            .client
            .post(&self.config.api_base)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let completion = extract_completion(body)?;
        parse_summary(&completion)
    }
}
