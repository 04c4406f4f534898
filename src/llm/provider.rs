use async_trait::async_trait;
use thiserror::Error;

use super::types::GenerationRequest;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to {provider} failed: {message}")]
    Transport { provider: String, message: String },
    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Text to fixed-length vector. Must be deterministic for identical input.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// return the provider name (e.g. "lmstudio", "llama_cpp")
    fn name(&self) -> &str;

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;

    /// embed several inputs, preserving order
    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        let mut vectors = Vec::with_capacity(inputs.len());
        for input in inputs {
            vectors.push(self.embed(input).await?);
        }
        Ok(vectors)
    }
}

/// Local language model that answers from a supplied context block.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError>;
}
