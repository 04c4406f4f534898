use super::policies::PolicySection;
use super::types::{Chunk, ChunkMetadata};
use crate::llm::{EmbeddingProvider, ProviderError};

/// Embeds each section in order; ids are `chunk-{i}` and `chunk_index` is `i`.
pub async fn build_chunks(
    embedder: &dyn EmbeddingProvider,
    sections: &[PolicySection],
) -> Result<Vec<Chunk>, ProviderError> {
    let mut chunks = Vec::with_capacity(sections.len());

    for (i, section) in sections.iter().enumerate() {
        tracing::info!(
            "Embedding chunk {}/{}: {} - {}",
            i + 1,
            sections.len(),
            section.source,
            section.section
        );
        let embedding = embedder.embed(section.content).await?;

        chunks.push(Chunk {
            id: format!("chunk-{}", i),
            content: section.content.to_string(),
            embedding,
            metadata: ChunkMetadata {
                source: section.source.to_string(),
                section: section.section.to_string(),
                chunk_index: i,
            },
        });
    }

    Ok(chunks)
}
