//! Read-only chunk table loaded once at startup.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::Chunk;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to access corpus file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("chunk '{0}' has an empty embedding")]
    EmptyEmbedding(String),
    #[error("chunk '{id}' has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        id: String,
        expected: usize,
        found: usize,
    },
    #[error("duplicate chunk id '{0}'")]
    DuplicateId(String),
}

/// Immutable set of embedded chunks in corpus order.
#[derive(Debug, Clone, Default)]
pub struct ChunkStore {
    chunks: Vec<Chunk>,
    dimensions: Option<usize>,
}

impl ChunkStore {
    /// Validates and wraps a chunk list. All embeddings must share one dimensionality.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Result<Self, CorpusError> {
        let mut dimensions = None;
        let mut seen = HashSet::with_capacity(chunks.len());

        for chunk in &chunks {
            if !seen.insert(chunk.id.as_str()) {
                return Err(CorpusError::DuplicateId(chunk.id.clone()));
            }
            let found = chunk.embedding.len();
            if found == 0 {
                return Err(CorpusError::EmptyEmbedding(chunk.id.clone()));
            }
            match dimensions {
                None => dimensions = Some(found),
                Some(expected) if expected != found => {
                    return Err(CorpusError::DimensionMismatch {
                        id: chunk.id.clone(),
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self { chunks, dimensions })
    }

    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let chunks: Vec<Chunk> = serde_json::from_str(json)?;
        Self::from_chunks(chunks)
    }

    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let contents = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded {} chunks ({} dimensions) from {}",
            store.len(),
            store.dimensions().unwrap_or(0),
            path.display()
        );
        Ok(store)
    }

    /// Writes the corpus in the persisted JSON format.
    pub fn save(&self, path: &Path) -> Result<(), CorpusError> {
        let io_err = |source: std::io::Error| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.chunks)?;
        fs::write(path, json).map_err(io_err)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn get(&self, id: &str) -> Option<&Chunk> {
        self.chunks.iter().find(|chunk| chunk.id == id)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Embedding dimensionality shared by every chunk; `None` for an empty corpus.
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }
}
