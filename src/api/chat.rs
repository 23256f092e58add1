//! `POST /chat` - location-gated visitor questions.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use crate::agent::{AgentConfig, LlmBinding, Task};
use crate::sites::rejection_message;

use super::routes::AppState;
use super::types::{ChatRequest, ChatResponse};

/// POST /chat - Answer a question about a Sigiriya location.
///
/// Locations outside the allow-list get a fixed rejection (still 200) and
/// never reach the model. Runtime failures surface as a bare 500.
pub async fn sigiriya_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    if !state.allow_list.is_allowed(&req.location) {
        tracing::info!(location = %req.location, "Rejected location outside Sigiriya");
        return Ok(Json(ChatResponse {
            response: rejection_message(&req.location),
            location: req.location,
        }));
    }

    let agent = AgentConfig::site_guide(&req.location, LlmBinding::from_config(&state.config));
    let task = Task::explain(&req.user_query, &req.location);

    let span = tracing::info_span!("chat", request_id = %Uuid::new_v4(), location = %req.location);
    let result = state
        .runtime
        .execute(&agent, &task)
        .instrument(span)
        .await
        .map_err(|e| {
            tracing::error!(location = %req.location, "Agent run failed: {:#}", e);
            internal_error()
        })?;

    Ok(Json(ChatResponse {
        location: req.location,
        response: result,
    }))
}

fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error".to_string(),
    )
}
