use thiserror::Error;

/// Everything that can go wrong talking to the inference backend.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("failed to serialize generate request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to build request: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("request to Ollama timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("failed to reach Ollama: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Ollama returned status {0}")]
    Status(u16),

    #[error("failed to decode Ollama response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Ollama reported an error: {0}")]
    Backend(String),
}

impl LlmError {
    /// Classify an error returned by `RequestBuilder::send`.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::BuildRequest(err)
        } else if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }
}
