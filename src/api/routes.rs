//! HTTP route table and shared state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::agent::AgentRuntime;
use crate::config::Config;
use crate::sites::LocationAllowList;

use super::chat::sigiriya_chat;
use super::types::HealthResponse;

/// Immutable state shared by every request.
pub struct AppState {
    pub config: Config,
    pub allow_list: LocationAllowList,
    pub runtime: Arc<dyn AgentRuntime>,
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(sigiriya_chat))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::agent::{AgentConfig, Task};

    struct Unreachable;

    #[async_trait]
    impl AgentRuntime for Unreachable {
        async fn execute(&self, _agent: &AgentConfig, _task: &Task) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("no runtime in this test"))
        }
    }

    #[tokio::test]
    async fn health_reports_version() {
        let state = Arc::new(AppState {
            config: Config::new("groq/llama-3.3-70b-versatile".to_string()),
            allow_list: LocationAllowList::default(),
            runtime: Arc::new(Unreachable),
        });

        let response = routes(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }
}
