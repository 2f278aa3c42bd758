use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use paleluna_config::AiConfig;
use paleluna_prompt::{PromptBuilder, SessionContext, fallback_response};

use crate::clean::clean_response;
use crate::error::LlmError;
use crate::InferenceBackend;

/// The liveness probe never waits longer than this, whatever the configured
/// request timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: GenerateOptions,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    config: Arc<AiConfig>,
    prompts: PromptBuilder,
}

impl OllamaClient {
    pub fn new(config: Arc<AiConfig>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(%err, "failed to build http client; using defaults");
                reqwest::Client::new()
            });
        Self::with_http_client(config, client)
    }

    /// Use a caller-supplied `reqwest::Client`.  Both endpoints still carry
    /// their own per-request timeout.
    pub fn with_http_client(config: Arc<AiConfig>, client: reqwest::Client) -> Self {
        Self {
            client,
            config,
            prompts: PromptBuilder::new(),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    /// `GET /api/version`; true only on a 200.
    pub async fn probe(&self) -> bool {
        let response = self
            .client
            .get(self.endpoint("/api/version"))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                debug!(%status, "ollama liveness probe");
                status == StatusCode::OK
            }
            Err(err) => {
                debug!(?err, url = %self.config.ollama_url, "ollama unreachable");
                false
            }
        }
    }

    /// Ask the model for Pale Luna's reply.
    ///
    /// Disabled backends and empty replies answer with the canned fallback.
    /// Request failures do the same when `fallback_enabled` is set and are
    /// returned as errors otherwise.
    pub async fn generate_reply(
        &self,
        input: &str,
        ctx: &SessionContext,
    ) -> Result<String, LlmError> {
        if !self.config.enabled {
            return Ok(fallback_response(input, ctx));
        }

        match self.generate(input, ctx).await {
            Ok(raw) => {
                let cleaned = clean_response(&raw);
                if cleaned.is_empty() {
                    warn!(raw_len = raw.len(), "ollama reply empty after cleaning; using fallback");
                    return Ok(fallback_response(input, ctx));
                }
                info!(model = %self.config.model, reply_len = cleaned.len(), "ollama reply received");
                Ok(cleaned)
            }
            Err(err) if self.config.fallback_enabled => {
                warn!(%err, "ollama request failed; using fallback");
                Ok(fallback_response(input, ctx))
            }
            Err(err) => Err(err),
        }
    }

    async fn generate(&self, input: &str, ctx: &SessionContext) -> Result<String, LlmError> {
        let prompt = self.prompts.build(input, ctx);
        let payload = GenerateRequest {
            model: &self.config.model,
            prompt: &prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
        };
        let body = serde_json::to_vec(&payload).map_err(LlmError::Serialize)?;

        info!(model = %self.config.model, "sending prompt to ollama");
        let response = self
            .client
            .post(self.endpoint("/api/generate"))
            .timeout(self.config.timeout)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(LlmError::from_send)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LlmError::Status(status.as_u16()));
        }

        let decoded: GenerateResponse = response.json().await.map_err(LlmError::Decode)?;
        if let Some(error) = decoded.error.filter(|e| !e.is_empty()) {
            return Err(LlmError::Backend(error));
        }
        debug!(done = decoded.done, "ollama generate finished");
        Ok(decoded.response)
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn is_available(&self) -> bool {
        self.probe().await
    }

    async fn complete(&self, input: &str, ctx: &SessionContext) -> Result<String, LlmError> {
        self.generate_reply(input, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_ollama_shape() {
        let payload = GenerateRequest {
            model: "llama3.2:3b",
            prompt: "hello",
            stream: false,
            options: GenerateOptions {
                temperature: 0.5,
                num_predict: 150,
            },
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "llama3.2:3b");
        assert_eq!(value["prompt"], "hello");
        assert_eq!(value["stream"], false);
        assert_eq!(value["options"]["temperature"], 0.5);
        assert_eq!(value["options"]["num_predict"], 150);
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let decoded: GenerateResponse = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert!(decoded.response.is_empty());
        assert!(decoded.done);
        assert!(decoded.error.is_none());

        let errored: GenerateResponse =
            serde_json::from_str(r#"{"error":"model 'x' not found"}"#).unwrap();
        assert_eq!(errored.error.as_deref(), Some("model 'x' not found"));
    }

    #[test]
    fn endpoints_join_without_double_slash() {
        let config = AiConfig {
            ollama_url: "http://localhost:11434/".to_string(),
            ..AiConfig::default()
        };
        let client = OllamaClient::new(Arc::new(config));
        assert_eq!(
            client.endpoint("/api/generate"),
            "http://localhost:11434/api/generate"
        );
    }
}
