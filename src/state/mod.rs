use std::sync::Arc;

use anyhow::Context;

use crate::assistant::{Assistant, QuerySupervisor};
use crate::core::config::{AppPaths, AssistantSettings, ConfigService};
use crate::corpus::ChunkStore;
use crate::llm::OpenAiCompatProvider;

pub mod error;

use error::InitializationError;

/// Application state shared across all routes.
///
/// Everything here is read-only after startup except the supervisor,
/// which tracks the in-flight query per client.
#[derive(Clone)]
pub struct AppState {
    pub paths: Arc<AppPaths>,
    pub config: ConfigService,
    pub settings: Arc<AssistantSettings>,
    pub assistant: Arc<Assistant>,
    pub supervisor: QuerySupervisor,
}

impl AppState {
    /// Initializes the application state.
    ///
    /// This process includes:
    /// 1. Resolving paths and loading configuration
    /// 2. Loading the precomputed chunk store
    /// 3. Connecting the embedding and generation provider
    pub async fn initialize() -> Result<Arc<Self>, InitializationError> {
        let paths = Arc::new(AppPaths::new());
        let config = ConfigService::new(paths.clone());

        let settings = config
            .load_settings()
            .map_err(|e| InitializationError::Config(e.into()))?;

        let corpus_path = paths.resolve(&settings.corpus.path);
        let store = ChunkStore::load(&corpus_path)
            .with_context(|| {
                format!(
                    "run `build-corpus` to create {}",
                    corpus_path.display()
                )
            })
            .map_err(InitializationError::Corpus)?;

        let provider = Arc::new(
            OpenAiCompatProvider::new(&settings.provider)
                .map_err(|e| InitializationError::Provider(e.into()))?,
        );

        let probe = provider.clone();
        tokio::spawn(async move {
            if !probe.health_check().await {
                tracing::warn!(
                    "Model server at {} is not reachable; questions outside the FAQ will fail until it is",
                    probe.base_url()
                );
            }
        });

        let assistant = Assistant::new(
            Arc::new(store),
            provider.clone(),
            provider,
            &settings,
        );

        Ok(Self::from_parts(paths, config, settings, assistant))
    }

    pub fn from_parts(
        paths: Arc<AppPaths>,
        config: ConfigService,
        settings: AssistantSettings,
        assistant: Assistant,
    ) -> Arc<Self> {
        Arc::new(AppState {
            paths,
            config,
            settings: Arc::new(settings),
            assistant: Arc::new(assistant),
            supervisor: QuerySupervisor::new(),
        })
    }
}
