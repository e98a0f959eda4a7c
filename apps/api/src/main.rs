mod assistant;
mod catalog;
mod config;
mod errors;
mod filter;
mod llm_client;
mod models;
mod routes;
mod selection;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assistant::Assistant;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Aideulim API v{}", env!("CARGO_PKG_VERSION"));

    if config.api_key.is_empty() {
        tracing::warn!("API_KEY is not set; AI features will return fallback text");
    }

    let assistant = Assistant::new(Arc::new(GeminiClient::new(config.llm())));
    info!("LLM client initialized (model: {})", assistant.model());

    let catalog = Catalog::seeded();
    info!("Loaded {} postings", catalog.len());

    let state = AppState::new(catalog, assistant);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
