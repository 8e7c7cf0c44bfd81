//! Generation provider seam and an OpenAI-compatible HTTP implementation.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Longest error body kept in [`GeneratorError::UnexpectedStatus`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// One outbound generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCall<'a> {
    pub system_instruction: &'a str,
    pub user_prompt: &'a str,
    pub model: &'a str,
    pub max_tokens: u32,
}

/// External text-generation service: a single call returning unstructured text.
pub trait GenerationProvider: Send + Sync {
    /// Run one generation call and return the raw completion text.
    fn generate(
        &self,
        call: &GenerationCall<'_>,
    ) -> impl Future<Output = Result<String, GeneratorError>> + Send;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    completions_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Creates a provider for `base_url` (e.g. `https://api.openai.com/v1`).
    ///
    /// The request itself has no total timeout; callers bound it through
    /// [`crate::ContentGenerator`].
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] for a blank key or URL, and
    /// [`GeneratorError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, GeneratorError> {
        if api_key.trim().is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "API key must not be empty".to_string(),
            ));
        }
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "base URL must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent("trendscript/0.1 (content-generation)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            completions_url: format!("{base}/chat/completions"),
        })
    }

    #[must_use]
    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }
}

/// Drop a leading reasoning block some models emit before the answer.
fn strip_reasoning(text: &str) -> &str {
    const THINK_OPEN: &str = "<think>";
    const THINK_CLOSE: &str = "</think>";
    let trimmed = text.trim_start();
    if !trimmed.starts_with(THINK_OPEN) {
        return text;
    }
    match trimmed.find(THINK_CLOSE) {
        Some(idx) => trimmed[idx + THINK_CLOSE.len()..].trim(),
        None => text,
    }
}

impl GenerationProvider for OpenAiProvider {
    async fn generate(&self, call: &GenerationCall<'_>) -> Result<String, GeneratorError> {
        let body = ChatRequest {
            model: call.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: call.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: call.user_prompt,
                },
            ],
            max_tokens: call.max_tokens,
            stream: false,
        };

        tracing::debug!(
            url = %self.completions_url,
            model = call.model,
            max_tokens = call.max_tokens,
            "sending generation request"
        );

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "generation provider returned an error");
            return Err(GeneratorError::UnexpectedStatus {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let text = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| GeneratorError::Deserialize {
                context: "chat completion response".to_string(),
                source: e,
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GeneratorError::EmptyCompletion)?;

        Ok(strip_reasoning(&content).to_string())
    }
}
