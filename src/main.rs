//! Sigiriya Guide - HTTP Server Entry Point
//!
//! Starts the HTTP server that exposes the chat API.

use sigiriya_guide::{api, config, config::Config};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sigiriya_guide=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config::apply_env_defaults();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration: model={}", config.model);
    if config.groq_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; chat requests for valid locations will fail");
    }
    if config.serper_api_key.is_none() {
        warn!("SERPER_API_KEY is not set; web search tool calls will fail");
    }

    // Start HTTP server
    info!("Starting server on {}:{}", config.host, config.port);

    api::serve(config).await?;

    Ok(())
}
