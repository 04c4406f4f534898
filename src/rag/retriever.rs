//! Linear top-K similarity search over the chunk store.

use serde::{Deserialize, Serialize};

use super::vector_math::score_all;
use super::RetrievalError;
use crate::core::config::defaults::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_K};
use crate::corpus::{Chunk, ChunkStore};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieverConfig {
    /// Maximum number of chunks returned.
    pub top_k: usize,
    /// Chunks scoring strictly below this are dropped.
    pub similarity_threshold: f32,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// A chunk paired with its cosine similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrievalResult<'a> {
    pub chunk: &'a Chunk,
    pub score: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Retriever {
    config: RetrieverConfig,
}

impl Retriever {
    pub fn new(config: RetrieverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }

    /// Ranks every chunk against `query_embedding`.
    ///
    /// Results are sorted by descending score; equal scores keep corpus order.
    /// An empty result means nothing cleared the threshold and is not an error.
    pub fn retrieve<'a>(
        &self,
        query_embedding: &[f32],
        store: &'a ChunkStore,
    ) -> Result<Vec<RetrievalResult<'a>>, RetrievalError> {
        if query_embedding.is_empty() {
            return Err(RetrievalError::EmptyVector);
        }

        let chunks = store.chunks();
        let scores = score_all(
            query_embedding,
            chunks.iter().map(|chunk| chunk.embedding.as_slice()),
        )?;

        let mut results: Vec<RetrievalResult<'a>> = scores
            .into_iter()
            .filter(|(_, score)| *score >= self.config.similarity_threshold)
            .map(|(idx, score)| RetrievalResult {
                chunk: &chunks[idx],
                score,
            })
            .collect();

        // sort_by is stable, so ties stay in corpus order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(self.config.top_k);

        tracing::debug!(
            "Retrieved {} of {} chunks (threshold {}, top_k {})",
            results.len(),
            chunks.len(),
            self.config.similarity_threshold,
            self.config.top_k
        );
        Ok(results)
    }
}
