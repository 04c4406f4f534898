use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Inputs of one grounded generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub system_prompt: &'a str,
    pub context: &'a str,
    pub query: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationRequest<'_> {
    /// Context goes into the system turn under a `CONTEXT` heading; the query is the user turn.
    pub fn to_chat_request(&self) -> ChatRequest {
        let system = format!(
            "{}\n\nCONTEXT:\n{}",
            self.system_prompt.trim_end(),
            self.context
        );
        ChatRequest {
            messages: vec![ChatMessage::system(system), ChatMessage::user(self.query)],
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        }
    }
}
