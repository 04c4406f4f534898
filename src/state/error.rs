use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("Failed to load configuration: {0}")]
    Config(#[source] anyhow::Error),

    #[error("Failed to load policy corpus: {0:#}")]
    Corpus(#[source] anyhow::Error),

    #[error("Failed to initialize model provider: {0}")]
    Provider(#[source] anyhow::Error),
}
