use std::sync::Arc;

use super::supersede::QueryTicket;
use super::{AnswerOrigin, AssistantAnswer, AssistantError};
use crate::core::config::{AssistantSettings, GenerationSettings};
use crate::corpus::ChunkStore;
use crate::faq::{default_faq, FaqMatcher};
use crate::llm::{EmbeddingProvider, GenerationProvider, GenerationRequest};
use crate::rag::{build_context, collect_sources, Retriever};

/// Answers policy questions from the FAQ table or the retrieved corpus.
///
/// Holds only shared read-only data, so one instance serves every request.
#[derive(Clone)]
pub struct Assistant {
    store: Arc<ChunkStore>,
    faq: Option<&'static FaqMatcher>,
    retriever: Retriever,
    embedder: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn GenerationProvider>,
    generation: GenerationSettings,
}

impl Assistant {
    pub fn new(
        store: Arc<ChunkStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn GenerationProvider>,
        settings: &AssistantSettings,
    ) -> Self {
        let faq = settings.faq.enabled.then(default_faq);
        Self {
            store,
            faq,
            retriever: Retriever::new(settings.retrieval),
            embedder,
            generator,
            generation: settings.generation.clone(),
        }
    }

    /// Replaces the FAQ table; `None` sends every query through retrieval.
    pub fn with_faq(mut self, faq: Option<&'static FaqMatcher>) -> Self {
        self.faq = faq;
        self
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    pub fn faq(&self) -> Option<&'static FaqMatcher> {
        self.faq
    }

    pub async fn ask(&self, query: &str) -> Result<AssistantAnswer, AssistantError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AssistantError::EmptyQuery);
        }

        if let Some(response) = self.faq.and_then(|faq| faq.respond(query)) {
            tracing::info!("Answered from FAQ cache");
            return Ok(AssistantAnswer {
                answer: response.answer,
                sources: response.sources,
                origin: AnswerOrigin::Faq,
            });
        }

        let embedding = self.embedder.embed(query).await.map_err(|err| {
            tracing::warn!("Embedding via {} failed: {}", self.embedder.name(), err);
            AssistantError::Embedding(err)
        })?;

        let results = self.retriever.retrieve(&embedding, &self.store)?;
        if results.is_empty() {
            tracing::info!("No chunk cleared the similarity threshold; declining");
            return Ok(AssistantAnswer::declined());
        }

        for result in &results {
            tracing::debug!(
                "  {:.3} {} / {}",
                result.score,
                result.chunk.metadata.source,
                result.chunk.metadata.section
            );
        }

        let context = build_context(&results);
        let sources = collect_sources(&results);

        let request = GenerationRequest {
            system_prompt: &self.generation.system_prompt,
            context: &context,
            query,
            max_tokens: self.generation.max_tokens,
            temperature: self.generation.temperature,
        };
        let answer = self.generator.generate(request).await.map_err(|err| {
            tracing::warn!("Generation via {} failed: {}", self.generator.name(), err);
            AssistantError::Generation(err)
        })?;

        Ok(AssistantAnswer {
            answer: answer.trim().to_string(),
            sources,
            origin: AnswerOrigin::Generated,
        })
    }

    /// Like [`Assistant::ask`], but resolves to `Cancelled` as soon as `ticket` is superseded.
    ///
    /// Dropping the in-flight pipeline aborts any pending model request.
    pub async fn ask_superseding(
        &self,
        query: &str,
        ticket: &mut QueryTicket,
    ) -> Result<AssistantAnswer, AssistantError> {
        tokio::select! {
            biased;
            _ = ticket.superseded() => {
                tracing::info!("Query superseded before completion");
                Err(AssistantError::Cancelled)
            }
            result = self.ask(query) => result,
        }
    }
}
