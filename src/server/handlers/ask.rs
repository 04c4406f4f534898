use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::core::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
    /// Queries sharing a client id supersede each other.
    #[serde(default)]
    pub client_id: Option<String>,
}

pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let client_id = payload
        .client_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let answer = match client_id {
        Some(client_id) => {
            let mut ticket = state.supervisor.begin(client_id);
            state
                .assistant
                .ask_superseding(&payload.query, &mut ticket)
                .await?
        }
        None => state.assistant.ask(&payload.query).await?,
    };

    tracing::info!(
        "Answered query ({:?}, {} sources)",
        answer.origin,
        answer.sources.len()
    );
    Ok(Json(answer))
}
