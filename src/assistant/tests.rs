use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::*;
use crate::core::config::AssistantSettings;
use crate::corpus::{Chunk, ChunkMetadata, ChunkStore};
use crate::faq::default_faq;
use crate::llm::{EmbeddingProvider, GenerationProvider, GenerationRequest, ProviderError};

const RETENTION: [f32; 4] = [0.1, 0.7, 0.2, 0.6];

/// Returns a canned vector per query, or a far-away vector for anything unknown.
#[derive(Default)]
struct FakeEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    calls: AtomicUsize,
    fail: bool,
}

impl FakeEmbedder {
    fn with(query: &str, vector: &[f32]) -> Self {
        let mut vectors = HashMap::new();
        vectors.insert(query.to_string(), vector.to_vec());
        Self {
            vectors,
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for FakeEmbedder {
    fn name(&self) -> &str {
        "fake"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::Transport {
                provider: "fake".to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![-1.0, 0.0, 0.0, 0.0]))
    }
}

#[derive(Debug, Clone)]
struct RecordedRequest {
    system_prompt: String,
    context: String,
    query: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Default)]
struct FakeGenerator {
    reply: String,
    fail: bool,
    calls: AtomicUsize,
    last: Mutex<Option<RecordedRequest>>,
}

impl FakeGenerator {
    fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> RecordedRequest {
        self.last
            .lock()
            .unwrap()
            .clone()
            .expect("generator was called")
    }
}

#[async_trait]
impl GenerationProvider for FakeGenerator {
    fn name(&self) -> &str {
        "fake"
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(RecordedRequest {
            system_prompt: request.system_prompt.to_string(),
            context: request.context.to_string(),
            query: request.query.to_string(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        });
        if self.fail {
            return Err(ProviderError::Status {
                provider: "fake".to_string(),
                status: 500,
                body: "model crashed".to_string(),
            });
        }
        Ok(self.reply.clone())
    }
}

/// Signals when generation starts, then never finishes.
#[derive(Default)]
struct StalledGenerator {
    started: Notify,
}

#[async_trait]
impl GenerationProvider for StalledGenerator {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn generate(&self, _request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        self.started.notify_one();
        std::future::pending().await
    }
}

fn chunk(index: usize, source: &str, section: &str, embedding: [f32; 4]) -> Chunk {
    Chunk {
        id: format!("chunk-{}", index),
        content: format!("{} guidance.", section),
        embedding: embedding.to_vec(),
        metadata: ChunkMetadata {
            source: source.to_string(),
            section: section.to_string(),
            chunk_index: index,
        },
    }
}

fn store() -> Arc<ChunkStore> {
    let chunks = vec![
        chunk(0, "E-Safety Policy", "Mobile Phone Usage", [0.9, 0.1, 0.0, 0.1]),
        chunk(1, "Data Protection Policy", "Who Can Access Your Data", [0.2, 0.6, 0.3, 0.5]),
        chunk(2, "Data Protection Policy", "Data Retention", RETENTION),
        chunk(3, "Acceptable Use Policy", "Password Security", [0.0, 0.0, 1.0, 0.0]),
    ];
    Arc::new(ChunkStore::from_chunks(chunks).expect("valid corpus"))
}

fn assistant(embedder: Arc<FakeEmbedder>, generator: Arc<dyn GenerationProvider>) -> Assistant {
    Assistant::new(store(), embedder, generator, &AssistantSettings::default())
}

#[tokio::test]
async fn faq_hit_skips_embedding_and_generation() {
    let embedder = Arc::new(FakeEmbedder::default());
    let generator = Arc::new(FakeGenerator::replying("unused"));
    let assistant = assistant(embedder.clone(), generator.clone());

    let answer = assistant
        .ask("Can I use my phone at school?")
        .await
        .expect("faq answer");

    assert_eq!(answer.origin, AnswerOrigin::Faq);
    assert!(answer.answer.ends_with("Source: Mobile Phone Policy"));
    assert_eq!(
        answer.sources,
        vec![SourceRef::new("Mobile Phone Policy", "Mobile Phone Rules")]
    );
    assert_eq!(embedder.calls(), 0);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn plagiarism_question_uses_plagiarism_entry() {
    let assistant = assistant(
        Arc::new(FakeEmbedder::default()),
        Arc::new(FakeGenerator::replying("unused")),
    );

    let answer = assistant
        .ask("what happens if i plagiarise")
        .await
        .expect("faq answer");

    assert_eq!(answer.origin, AnswerOrigin::Faq);
    assert_eq!(
        answer.sources,
        vec![SourceRef::new("Academic Integrity Policy", "Consequences")]
    );
}

#[tokio::test]
async fn retrieved_chunks_ground_the_generated_answer() {
    let query = "How long does the school keep my records?";
    let embedder = Arc::new(FakeEmbedder::with(query, &RETENTION));
    let generator = Arc::new(FakeGenerator::replying(
        "  Records are kept for as long as the law requires.\n",
    ));
    let assistant = assistant(embedder.clone(), generator.clone());

    let answer = assistant.ask(query).await.expect("generated answer");

    assert_eq!(answer.origin, AnswerOrigin::Generated);
    assert_eq!(answer.answer, "Records are kept for as long as the law requires.");
    assert_eq!(
        answer.sources[0],
        SourceRef::new("Data Protection Policy", "Data Retention")
    );
    assert!(!answer
        .sources
        .contains(&SourceRef::new("Acceptable Use Policy", "Password Security")));

    let request = generator.last_request();
    assert!(request
        .context
        .starts_with("[1] (Source: Data Protection Policy, Section: Data Retention, relevance: 1.00)"));
    assert_eq!(request.query, query);
    assert_eq!(request.max_tokens, 512);
    assert!((request.temperature - 0.7).abs() < f32::EPSILON);
    assert!(!request.system_prompt.is_empty());
    assert_eq!(embedder.calls(), 1);
}

#[tokio::test]
async fn empty_retrieval_declines_without_generating() {
    let embedder = Arc::new(FakeEmbedder::default());
    let generator = Arc::new(FakeGenerator::replying("unused"));
    let assistant = assistant(embedder.clone(), generator.clone());

    let answer = assistant
        .ask("What time does the canteen open?")
        .await
        .expect("decline is not an error");

    assert_eq!(answer, AssistantAnswer::declined());
    assert!(answer.answer.starts_with("I cannot find that specific information"));
    assert_eq!(embedder.calls(), 1);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn disabled_faq_routes_through_retrieval() {
    let query = "Can I use my phone at school?";
    let embedder = Arc::new(FakeEmbedder::with(query, &[1.0, 0.0, 0.0, 0.0]));
    let generator = Arc::new(FakeGenerator::replying("Phones stay in bags."));
    let assistant = assistant(embedder.clone(), generator.clone()).with_faq(None);

    let answer = assistant.ask(query).await.expect("generated answer");

    assert_eq!(answer.origin, AnswerOrigin::Generated);
    assert_eq!(
        answer.sources[0],
        SourceRef::new("E-Safety Policy", "Mobile Phone Usage")
    );
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn faq_can_be_disabled_from_settings() {
    let mut settings = AssistantSettings::default();
    settings.faq.enabled = false;
    let assistant = Assistant::new(
        store(),
        Arc::new(FakeEmbedder::default()),
        Arc::new(FakeGenerator::replying("unused")),
        &settings,
    );

    assert!(assistant.faq().is_none());
    let enabled = assistant.with_faq(Some(default_faq()));
    assert_eq!(enabled.faq().map(|faq| faq.len()), Some(4));
}

#[tokio::test]
async fn embedding_failure_propagates() {
    let generator = Arc::new(FakeGenerator::replying("unused"));
    let assistant = assistant(Arc::new(FakeEmbedder::failing()), generator.clone());

    let err = assistant
        .ask("How long does the school keep my records?")
        .await
        .unwrap_err();

    assert!(matches!(err, AssistantError::Embedding(ProviderError::Transport { .. })));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn generation_failure_propagates() {
    let query = "How long does the school keep my records?";
    let generator = Arc::new(FakeGenerator::failing());
    let assistant = assistant(Arc::new(FakeEmbedder::with(query, &RETENTION)), generator.clone());

    let err = assistant.ask(query).await.unwrap_err();

    assert!(matches!(
        err,
        AssistantError::Generation(ProviderError::Status { status: 500, .. })
    ));
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn dimension_mismatch_surfaces_as_retrieval_error() {
    let query = "How long does the school keep my records?";
    let embedder = Arc::new(FakeEmbedder::with(query, &[1.0, 0.0]));
    let assistant = assistant(embedder, Arc::new(FakeGenerator::replying("unused")));

    let err = assistant.ask(query).await.unwrap_err();

    assert!(matches!(err, AssistantError::Retrieval(_)));
}

#[tokio::test]
async fn blank_query_is_rejected() {
    let embedder = Arc::new(FakeEmbedder::default());
    let assistant = assistant(embedder.clone(), Arc::new(FakeGenerator::replying("unused")));

    let err = assistant.ask("   \n ").await.unwrap_err();

    assert!(matches!(err, AssistantError::EmptyQuery));
    assert_eq!(embedder.calls(), 0);
}

#[tokio::test]
async fn newer_query_cancels_in_flight_generation() {
    let query = "How long does the school keep my records?";
    let generator = Arc::new(StalledGenerator::default());
    let assistant = Arc::new(assistant(
        Arc::new(FakeEmbedder::with(query, &RETENTION)),
        generator.clone(),
    ));
    let supervisor = QuerySupervisor::new();

    let mut ticket = supervisor.begin("student-1");
    let in_flight = {
        let assistant = assistant.clone();
        tokio::spawn(async move { assistant.ask_superseding(query, &mut ticket).await })
    };

    generator.started.notified().await;
    let _newer = supervisor.begin("student-1");

    let result = tokio::time::timeout(Duration::from_secs(2), in_flight)
        .await
        .expect("superseded query resolves")
        .expect("task completes");
    assert!(matches!(result, Err(AssistantError::Cancelled)));
}

#[tokio::test]
async fn already_superseded_ticket_never_reaches_providers() {
    let embedder = Arc::new(FakeEmbedder::default());
    let assistant = assistant(embedder.clone(), Arc::new(FakeGenerator::replying("unused")));
    let supervisor = QuerySupervisor::new();

    let mut stale = supervisor.begin("student-1");
    let _current = supervisor.begin("student-1");

    let result = assistant
        .ask_superseding("How long does the school keep my records?", &mut stale)
        .await;

    assert!(matches!(result, Err(AssistantError::Cancelled)));
    assert_eq!(embedder.calls(), 0);
}

#[tokio::test]
async fn other_clients_are_not_cancelled() {
    let query = "How long does the school keep my records?";
    let generator = Arc::new(FakeGenerator::replying("Kept as required by law."));
    let assistant = assistant(Arc::new(FakeEmbedder::with(query, &RETENTION)), generator);
    let supervisor = QuerySupervisor::new();

    let mut ticket = supervisor.begin("student-1");
    let _other = supervisor.begin("student-2");

    let answer = assistant
        .ask_superseding(query, &mut ticket)
        .await
        .expect("not superseded");

    assert_eq!(answer.origin, AnswerOrigin::Generated);
}

#[test]
fn answer_serializes_with_snake_case_origin() {
    let value = serde_json::to_value(AssistantAnswer::declined()).expect("serializes");

    assert_eq!(value["origin"], "no_context");
    assert_eq!(value["sources"], serde_json::json!([]));
}
