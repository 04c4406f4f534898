//! Client for OpenAI-compatible local servers (LM Studio, llama.cpp server, Ollama).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::{EmbeddingProvider, GenerationProvider, ProviderError};
use super::types::GenerationRequest;
use crate::core::config::ProviderSettings;

const PROVIDER_NAME: &str = "openai_compat";

#[derive(Clone)]
pub struct OpenAiCompatProvider {
    base_url: String,
    embedding_model: String,
    chat_model: String,
    client: Client,
}

impl OpenAiCompatProvider {
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| ProviderError::InvalidResponse("invalid API key".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            embedding_model: settings.embedding_model.clone(),
            chat_model: settings.chat_model.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// check if the server answers `/v1/models`
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/v1/models", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: PROVIDER_NAME.to_string(),
                status,
                body,
            });
        }

        res.json()
            .await
            .map_err(|err| ProviderError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let mut vectors = self.embed_batch(&[text.to_string()]).await?;
        vectors.pop().ok_or(ProviderError::EmptyResponse)
    }

    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let body = json!({
            "model": self.embedding_model,
            "input": inputs,
        });
        let payload = self.post_json("/v1/embeddings", &body).await?;
        let embeddings = parse_embeddings(&payload)?;

        if embeddings.len() != inputs.len() {
            return Err(ProviderError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                inputs.len(),
                embeddings.len()
            )));
        }
        Ok(embeddings)
    }
}

#[async_trait]
impl GenerationProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        let chat = request.to_chat_request();
        let mut body = json!({
            "model": self.chat_model,
            "messages": chat.messages,
            "stream": false,
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(temperature) = chat.temperature {
                obj.insert("temperature".to_string(), json!(temperature));
            }
            if let Some(max_tokens) = chat.max_tokens {
                obj.insert("max_tokens".to_string(), json!(max_tokens));
            }
        }

        let payload = self.post_json("/v1/chat/completions", &body).await?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .unwrap_or_default();
        if content.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

fn parse_embeddings(payload: &Value) -> Result<Vec<Vec<f32>>, ProviderError> {
    let data = payload["data"]
        .as_array()
        .ok_or_else(|| ProviderError::InvalidResponse("missing 'data' array".to_string()))?;

    let mut indexed = Vec::with_capacity(data.len());
    for (position, item) in data.iter().enumerate() {
        let values = item["embedding"].as_array().ok_or_else(|| {
            ProviderError::InvalidResponse(format!("item {} has no embedding", position))
        })?;
        let vector: Vec<f32> = values
            .iter()
            .filter_map(|v| v.as_f64().map(|f| f as f32))
            .collect();
        if vector.len() != values.len() {
            return Err(ProviderError::InvalidResponse(format!(
                "item {} contains non-numeric values",
                position
            )));
        }
        let index = item["index"].as_u64().map(|i| i as usize).unwrap_or(position);
        indexed.push((index, vector));
    }

    // Servers may return items out of input order.
    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed.into_iter().map(|(_, vector)| vector).collect())
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport {
        provider: PROVIDER_NAME.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};

    async fn spawn_stub(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}", addr)
    }

    fn provider_for(base_url: String) -> OpenAiCompatProvider {
        OpenAiCompatProvider::new(&ProviderSettings {
            base_url,
            timeout_secs: 5,
            ..ProviderSettings::default()
        })
        .expect("provider builds")
    }

    #[tokio::test]
    async fn embed_reads_vectors_in_index_order() {
        let app = Router::new().route(
            "/v1/embeddings",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["model"], "all-MiniLM-L6-v2");
                Json(json!({
                    "data": [
                        { "index": 1, "embedding": [0.0, 1.0] },
                        { "index": 0, "embedding": [1.0, 0.0] }
                    ]
                }))
            }),
        );
        let provider = provider_for(spawn_stub(app).await);

        let vectors = provider
            .embed_batch(&["first".to_string(), "second".to_string()])
            .await
            .expect("embeddings");

        assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[tokio::test]
    async fn generate_sends_sampling_limits_and_returns_content() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["max_tokens"], 512);
                assert_eq!(body["stream"], false);
                assert_eq!(body["messages"][1]["content"], "can i share my password");
                Json(json!({
                    "choices": [{ "message": { "content": "  No, never share it.  " } }]
                }))
            }),
        );
        let provider = provider_for(spawn_stub(app).await);

        let answer = provider
            .generate(GenerationRequest {
                system_prompt: "Answer from context.",
                context: "[1] Password Policy",
                query: "can i share my password",
                max_tokens: 512,
                temperature: 0.7,
            })
            .await
            .expect("answer");

        assert_eq!(answer, "No, never share it.");
    }

    #[tokio::test]
    async fn error_status_is_propagated() {
        let app = Router::new().route(
            "/v1/embeddings",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
        );
        let provider = provider_for(spawn_stub(app).await);

        let err = provider.embed("anything").await.unwrap_err();

        match err {
            ProviderError::Status { status, body, .. } => {
                assert_eq!(status, 503);
                assert_eq!(body, "model loading");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_completion_is_an_error() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [{ "message": { "content": "" } }] })) }),
        );
        let provider = provider_for(spawn_stub(app).await);

        let err = provider
            .generate(GenerationRequest {
                system_prompt: "s",
                context: "c",
                query: "q",
                max_tokens: 8,
                temperature: 0.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::EmptyResponse));
    }

    #[tokio::test]
    async fn health_check_reports_reachability() {
        let app = Router::new().route("/v1/models", get(|| async { Json(json!({ "data": [] })) }));
        let provider = provider_for(spawn_stub(app).await);
        assert!(provider.health_check().await);

        let unreachable = provider_for("http://127.0.0.1:9".to_string());
        assert!(!unreachable.health_check().await);
    }
}
