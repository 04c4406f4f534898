use serde_json::{json, Value};

use crate::llm::prompt::DEFAULT_SYSTEM_PROMPT;

pub const DEFAULT_TOP_K: usize = 4;
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 512;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_CORPUS_PATH: &str = "data/chunks.json";
pub const DEFAULT_PROVIDER_URL: &str = "http://127.0.0.1:1234";
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";
pub const DEFAULT_CHAT_MODEL: &str = "SmolLM2-360M-Instruct";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 60;

/// Baseline configuration that user files are merged over.
pub fn default_config() -> Value {
    json!({
        "retrieval": {
            "top_k": DEFAULT_TOP_K,
            "similarity_threshold": DEFAULT_SIMILARITY_THRESHOLD,
        },
        "generation": {
            "max_tokens": DEFAULT_MAX_TOKENS,
            "temperature": DEFAULT_TEMPERATURE,
            "system_prompt": DEFAULT_SYSTEM_PROMPT,
        },
        "faq": {
            "enabled": true,
        },
        "corpus": {
            "path": DEFAULT_CORPUS_PATH,
        },
        "provider": {
            "base_url": DEFAULT_PROVIDER_URL,
            "embedding_model": DEFAULT_EMBEDDING_MODEL,
            "chat_model": DEFAULT_CHAT_MODEL,
            "timeout_secs": DEFAULT_PROVIDER_TIMEOUT_SECS,
        },
    })
}
