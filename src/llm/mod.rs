pub mod openai_compat;
pub mod prompt;
pub mod provider;
pub mod types;

pub use openai_compat::OpenAiCompatProvider;
pub use provider::{EmbeddingProvider, GenerationProvider, ProviderError};
pub use types::{ChatMessage, ChatRequest, GenerationRequest};
