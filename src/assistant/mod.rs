//! Query pipeline: FAQ fast path, retrieval, grounded generation.

pub mod pipeline;
pub mod supersede;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::SourceRef;
use crate::llm::prompt::DECLINE_MESSAGE;
use crate::llm::ProviderError;
use crate::rag::RetrievalError;

pub use pipeline::Assistant;
pub use supersede::{QuerySupervisor, QueryTicket};

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("query must not be empty")]
    EmptyQuery,
    #[error("failed to embed query: {0}")]
    Embedding(#[source] ProviderError),
    #[error("retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),
    #[error("failed to generate answer: {0}")]
    Generation(#[source] ProviderError),
    #[error("query superseded by a newer request")]
    Cancelled,
}

/// How an answer was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOrigin {
    Faq,
    Generated,
    NoContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantAnswer {
    pub answer: String,
    pub sources: Vec<SourceRef>,
    pub origin: AnswerOrigin,
}

impl AssistantAnswer {
    /// Terminal answer when no chunk clears the similarity floor.
    pub fn declined() -> Self {
        Self {
            answer: DECLINE_MESSAGE.to_string(),
            sources: Vec::new(),
            origin: AnswerOrigin::NoContext,
        }
    }
}
