use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let faq_entries = state.assistant.faq().map_or(0, |faq| faq.len());
    Json(json!({
        "status": "ok",
        "chunks": state.assistant.store().len(),
        "faq_entries": faq_entries
    }))
}
