//! OpenAI-compatible chat completions provider.
//!
//! Works against any endpoint implementing the OpenAI Chat Completions API.
//! Exactly one HTTP request per completion; transport and status failures
//! are mapped to [`AnalysisError`] here so nothing reqwest-shaped leaks
//! upward.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::analysis::provider::{
    ChatMessage, CompletionRequest, CompletionResponse, LlmProvider,
};
use crate::config::LlmConfig;
use crate::error::AnalysisError;

/// OpenAI-compatible provider.
pub struct OpenAiProvider {
    client: Client,
    config: LlmConfig,
}

impl OpenAiProvider {
    /// Create a new provider from configuration.
    pub fn new(config: LlmConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalysisError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    /// Construct the chat completions URL. Strips a trailing `/v1` from the
    /// base URL to avoid double `/v1` segments.
    fn api_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1").unwrap_or(base);
        format!("{base}/v1/chat/completions")
    }

    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header(
                "Authorization",
                format!("Bearer {}", key.expose_secret()),
            ),
            None => request,
        }
    }
}

/// Truncate a response body for inclusion in error messages.
fn truncate_body(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        req: CompletionRequest,
    ) -> Result<CompletionResponse, AnalysisError> {
        let url = self.api_url();
        let body = ChatCompletionRequest {
            model: req.model.unwrap_or_else(|| self.config.model.clone()),
            messages: req.messages,
            temperature: req.temperature,
            max_tokens: req.max_tokens,
            top_p: req.top_p,
        };

        tracing::debug!(%url, model = %body.model, "sending completion request");

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body);
        let request = self.add_auth_header(request);

        let response = request.send().await.map_err(|e| {
            tracing::error!("completion request failed: {e}");
            AnalysisError::RequestFailed {
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AnalysisError::RequestFailed {
                reason: format!("failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            return Err(match status.as_u16() {
                401 => AnalysisError::AuthFailed,
                429 => AnalysisError::RateLimited,
                _ => AnalysisError::RequestFailed {
                    reason: format!("HTTP {}: {}", status, truncate_body(&response_text)),
                },
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&response_text).map_err(|e| AnalysisError::InvalidResponse {
                reason: format!(
                    "JSON parse error: {e}. Raw: {}",
                    truncate_body(&response_text)
                ),
            })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::InvalidResponse {
                reason: "no choices in response".to_string(),
            })?;

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
        })
    }
}

/// Wire format for the chat completions request.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
