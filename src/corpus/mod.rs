//! Static policy corpus: chunk types, the read-only store, and the offline build step.

pub mod builder;
pub mod policies;
pub mod store;
pub mod types;

pub use builder::build_chunks;
pub use policies::{PolicySection, POLICY_SECTIONS};
pub use store::{ChunkStore, CorpusError};
pub use types::{Chunk, ChunkMetadata, SourceRef};
