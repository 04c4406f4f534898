//! RAG Context Builder.
//!
//! Turns ranked retrieval results into:
//! 1. A numbered context block with source citations for the generator
//! 2. The de-duplicated list of policy sections the answer may cite

use super::retriever::RetrievalResult;
use crate::corpus::SourceRef;

/// Format ranked chunks into a context string, best match first.
pub fn build_context(results: &[RetrievalResult<'_>]) -> String {
    let mut context = String::new();

    for (i, result) in results.iter().enumerate() {
        let metadata = &result.chunk.metadata;
        context.push_str(&format!(
            "[{}] (Source: {}, Section: {}, relevance: {:.2})\n{}\n\n",
            i + 1,
            metadata.source,
            metadata.section,
            result.score,
            result.chunk.content.trim()
        ));
    }

    context.trim_end().to_string()
}

/// Citations for the retrieved chunks, in rank order, without repeats.
pub fn collect_sources(results: &[RetrievalResult<'_>]) -> Vec<SourceRef> {
    let mut sources: Vec<SourceRef> = Vec::with_capacity(results.len());
    for result in results {
        let source = result.chunk.source_ref();
        if !sources.contains(&source) {
            sources.push(source);
        }
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Chunk, ChunkMetadata};

    fn make_chunk(text: &str, source: &str, section: &str) -> Chunk {
        Chunk {
            id: format!("{}-{}", source, section),
            content: text.to_string(),
            embedding: vec![1.0],
            metadata: ChunkMetadata {
                source: source.to_string(),
                section: section.to_string(),
                chunk_index: 0,
            },
        }
    }

    #[test]
    fn context_lists_chunks_with_citations_in_rank_order() {
        let first = make_chunk("Phones must be switched off.  ", "E-Safety Policy", "Mobile Phone Usage");
        let second = make_chunk("Phones will be confiscated.", "E-Safety Policy", "Mobile Phone Sanctions");
        let results = vec![
            RetrievalResult { chunk: &first, score: 0.91 },
            RetrievalResult { chunk: &second, score: 0.456 },
        ];

        let context = build_context(&results);

        assert_eq!(
            context,
            "[1] (Source: E-Safety Policy, Section: Mobile Phone Usage, relevance: 0.91)\n\
             Phones must be switched off.\n\n\
             [2] (Source: E-Safety Policy, Section: Mobile Phone Sanctions, relevance: 0.46)\n\
             Phones will be confiscated."
        );
    }

    #[test]
    fn empty_results_give_empty_context() {
        assert!(build_context(&[]).is_empty());
        assert!(collect_sources(&[]).is_empty());
    }

    #[test]
    fn sources_are_deduplicated_preserving_rank() {
        let a = make_chunk("a", "Data Protection Policy", "Data Retention");
        let b = make_chunk("b", "Acceptable Use Policy", "Password Security");
        let results = vec![
            RetrievalResult { chunk: &a, score: 0.9 },
            RetrievalResult { chunk: &b, score: 0.8 },
            RetrievalResult { chunk: &a, score: 0.7 },
        ];

        let sources = collect_sources(&results);

        assert_eq!(
            sources,
            vec![
                SourceRef::new("Data Protection Policy", "Data Retention"),
                SourceRef::new("Acceptable Use Policy", "Password Security"),
            ]
        );
    }
}
