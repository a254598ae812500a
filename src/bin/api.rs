use std::sync::Arc;

use anyhow::Context;
use moment_collage::ai::LlmClient;
use moment_collage::api::{AppState, create_router};
use moment_collage::core::config::AppConfig;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is the normal production case.
    let _ = dotenvy::dotenv();
    moment_collage::setup_logging();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    if config.llm_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; summary requests will fail until it is configured");
    }

    let client = LlmClient::new(&config).context("Failed to initialize LLM client")?;
    info!(
        model = %client.model_name(),
        max_media_items = config.max_media_items,
        "LLM client ready"
    );

    let addr = config.bind_addr.clone();
    let app = create_router(AppState::new(config, Arc::new(client)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP server on {addr}"))?;
    info!("Starting HTTP server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
