//! RAG (Retrieval-Augmented Generation) module.
//!
//! This module provides:
//! - `Retriever`: cosine-similarity top-k search over the static chunk store
//! - `context_builder`: formats ranked chunks into a cited context block

pub mod context_builder;
pub mod retriever;
pub mod vector_math;

use thiserror::Error;

pub use context_builder::{build_context, collect_sources};
pub use retriever::{RetrievalResult, Retriever, RetrieverConfig};

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("vectors must not be empty")]
    EmptyVector,
    #[error("vector length mismatch: {expected} != {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
