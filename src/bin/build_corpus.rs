//! Embeds the built-in policy sections and writes the chunk store the server loads.
//!
//! Usage: `build-corpus [OUTPUT]`. Without an argument the configured `corpus.path` is used.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use policy_assistant::core::config::{AppPaths, ConfigService};
use policy_assistant::core::logging;
use policy_assistant::corpus::{build_chunks, ChunkStore, POLICY_SECTIONS};
use policy_assistant::llm::OpenAiCompatProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let paths = Arc::new(AppPaths::new());
    logging::init(&paths, "build-corpus.log");

    let config = ConfigService::new(paths.clone());
    let settings = config
        .load_settings()
        .context("Failed to load configuration")?;

    let output = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| paths.resolve(&settings.corpus.path));

    let provider = OpenAiCompatProvider::new(&settings.provider)
        .context("Failed to create embedding client")?;
    if !provider.health_check().await {
        tracing::warn!(
            "Embedding server at {} did not answer /v1/models; trying anyway",
            provider.base_url()
        );
    }

    tracing::info!(
        "Embedding {} policy sections with {}",
        POLICY_SECTIONS.len(),
        settings.provider.embedding_model
    );
    let chunks = build_chunks(&provider, &POLICY_SECTIONS)
        .await
        .context("Failed to embed policy sections")?;
    let store = ChunkStore::from_chunks(chunks).context("Embedded corpus is inconsistent")?;

    store
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Wrote {} chunks ({} dimensions) to {}",
        store.len(),
        store.dimensions().unwrap_or(0),
        output.display()
    );

    Ok(())
}
