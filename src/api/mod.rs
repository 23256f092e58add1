//! HTTP API for the Sigiriya guide.
//!
//! ## Endpoints
//!
//! - `POST /chat` - Ask about a location inside the Sigiriya complex
//! - `GET /health` - Health check

mod chat;
mod routes;
pub mod types;

use std::sync::Arc;

use crate::agent::{AgentRuntime, CrewRuntime};
use crate::config::Config;
use crate::sites::LocationAllowList;

pub use routes::{routes, AppState};

/// Build the production state and serve until the process exits.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let runtime: Arc<dyn AgentRuntime> = Arc::new(CrewRuntime::from_config(&config)?);
    serve_with_runtime(config, runtime).await
}

/// Serve with a caller-supplied agent runtime.
pub async fn serve_with_runtime(config: Config, runtime: Arc<dyn AgentRuntime>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState {
        config,
        allow_list: LocationAllowList::default(),
        runtime,
    });

    tracing::info!(sites = ?state.allow_list.sites(), "Serving Sigiriya locations");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, routes(state)).await?;

    Ok(())
}
