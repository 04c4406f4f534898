use serde::{Deserialize, Serialize};

/// One policy passage with its precomputed embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub content: String,
    pub embedding: Vec<f32>,
    pub metadata: ChunkMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkMetadata {
    /// Policy title, e.g. "Data Protection Policy".
    pub source: String,
    pub section: String,
    pub chunk_index: usize,
}

/// Citation attached to an answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    pub source: String,
    pub section: String,
}

impl SourceRef {
    pub fn new(source: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            section: section.into(),
        }
    }
}

impl Chunk {
    pub fn source_ref(&self) -> SourceRef {
        SourceRef::new(&self.metadata.source, &self.metadata.section)
    }
}
