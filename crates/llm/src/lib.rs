mod clean;
mod error;
mod ollama;

use async_trait::async_trait;

use paleluna_prompt::SessionContext;

pub use clean::clean_response;
pub use error::LlmError;
pub use ollama::{GenerateOptions, GenerateRequest, GenerateResponse, OllamaClient, PROBE_TIMEOUT};

/// A text-completion service Pale Luna can speak through.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Cheap liveness check.  Never errors; unreachable means `false`.
    async fn is_available(&self) -> bool;

    /// Produce a reply for `input`.  Implementations decide internally
    /// whether failures degrade to canned text or surface as errors.
    async fn complete(&self, input: &str, ctx: &SessionContext) -> Result<String, LlmError>;
}
