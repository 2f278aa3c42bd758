//! Decides, per player input, whether Pale Luna speaks through the model or
//! through canned text.
//!
//! The inference client already degrades to canned text on its own; this
//! layer adds a coarser net on top: the model is only tried when the feature
//! is enabled *and* the backend answers its liveness probe, and any error or
//! empty reply from it is replaced with the fallback line.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use paleluna_config::AiConfig;
use paleluna_llm::{InferenceBackend, OllamaClient};
use paleluna_prompt::{SessionContext, fallback_response};

/// Read-only snapshot rendered by the `ai status` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentStatus {
    pub enabled: bool,
    pub available: bool,
    pub model: String,
    pub endpoint: String,
}

pub struct AgentManager {
    backend: Arc<dyn InferenceBackend>,
    config: Arc<AiConfig>,
}

impl AgentManager {
    /// Manager backed by an [`OllamaClient`] built from `config`.
    pub fn new(config: Arc<AiConfig>) -> Self {
        let backend = Arc::new(OllamaClient::new(config.clone()));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: Arc<AiConfig>, backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Enabled and currently answering the liveness probe.  Disabled
    /// backends are never probed.
    pub async fn is_ai_available(&self) -> bool {
        self.config.enabled && self.backend.is_available().await
    }

    /// Reply to `input`.  Never empty, never an error.
    pub async fn process_input(&self, input: &str, ctx: &SessionContext) -> String {
        if self.is_ai_available().await {
            match self.backend.complete(input, ctx).await {
                Ok(reply) if !reply.trim().is_empty() => return reply,
                Ok(_) => warn!("inference backend returned an empty reply; using fallback"),
                Err(err) => warn!(%err, "inference backend failed; using fallback"),
            }
        } else {
            debug!(enabled = self.config.enabled, "model unavailable; using fallback");
        }

        fallback_response(input, ctx)
    }

    pub async fn status(&self) -> AgentStatus {
        AgentStatus {
            enabled: self.config.enabled,
            available: self.is_ai_available().await,
            model: self.config.model.clone(),
            endpoint: self.config.ollama_url.clone(),
        }
    }
}
