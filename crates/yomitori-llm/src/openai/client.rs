use std::time::Duration;

use reqwest::Client;

use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::error::CompletionError;
use crate::traits::CompletionService;

/// Client for an OpenAI-compatible chat-completions endpoint.
///
/// Configuration (credential, endpoint root, model, per-call timeout) is
/// fixed at construction and never mutated, so a single client can serve
/// any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    http: Client,
}

impl OpenAiClient {
    /// All four parameters are required; defaults belong to the caller's
    /// config layer, not here.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            timeout,
            http: Client::new(),
        }
    }

    /// The configured per-call deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CompletionError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "completion endpoint error");
            Err(CompletionError::Api {
                status,
                message: body,
            })
        }
    }
}

impl CompletionService for OpenAiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            // Extraction wants the single most likely reading, not variety.
            temperature: 0.0,
        };

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", self.auth_header())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::from_reqwest(e, self.timeout))?;

        let resp = Self::check_response(resp).await?;
        let reply: ChatResponse = resp.json().await.map_err(|e| {
            if e.is_decode() {
                CompletionError::Parse(e.to_string())
            } else {
                CompletionError::from_reqwest(e, self.timeout)
            }
        })?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| CompletionError::Parse("reply contained no choices".into()))
    }
}
