//! Typed view over the merged configuration tree.

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_CHAT_MODEL, DEFAULT_CORPUS_PATH, DEFAULT_EMBEDDING_MODEL, DEFAULT_MAX_TOKENS,
    DEFAULT_PROVIDER_TIMEOUT_SECS, DEFAULT_PROVIDER_URL, DEFAULT_TEMPERATURE,
};
use crate::llm::prompt::DEFAULT_SYSTEM_PROMPT;
use crate::rag::RetrieverConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    pub retrieval: RetrieverConfig,
    pub generation: GenerationSettings,
    pub faq: FaqSettings,
    pub corpus: CorpusSettings,
    pub provider: ProviderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub system_prompt: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqSettings {
    pub enabled: bool,
}

impl Default for FaqSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    pub path: String,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_CORPUS_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub timeout_secs: u64,
    pub api_key: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_URL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
            api_key: None,
        }
    }
}
