// src/application/ports/generation.rs
use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a single generation call. None of them are retried by
/// the caller of [`TextGenerator::generate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no access credential configured for the generation service")]
    MissingCredential,

    #[error("prompt must not be empty")]
    InvalidPrompt,

    #[error("network error: {0}")]
    Network(String),

    #[error("upstream responded with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("upstream returned no completion text")]
    EmptyResponse,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Ask the service for a short article about `prompt` and return the
    /// first completion's text.
    ///
    /// # Errors
    ///
    /// Returns the [`GenerationError`] describing why no text was produced.
    async fn generate(&self, prompt: &str, max_output_tokens: u32)
    -> Result<String, GenerationError>;
}

/// Generator installed when no credential is configured. Every call fails
/// with [`GenerationError::MissingCredential`] so read paths stay available.
#[derive(Debug, Default, Clone)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _max_output_tokens: u32,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::MissingCredential)
    }
}
