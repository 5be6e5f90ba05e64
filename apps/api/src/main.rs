mod chat;
mod collaborators;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::store::SessionStore;
use crate::collaborators::Collaborators;
use crate::config::{CollaboratorMode, Config};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener API v{}", env!("CARGO_PKG_VERSION"));

    let collaborators = Collaborators::from_config(&config)?;
    match &config.mode {
        CollaboratorMode::Backend { base_url } => {
            info!("Collaborators: screening backend at {base_url}")
        }
        CollaboratorMode::Local { .. } => info!(
            "Collaborators: local keyword scorer, LLM parsing and Q&A (model: {})",
            llm_client::MODEL
        ),
    }

    let state = AppState {
        collaborators,
        sessions: SessionStore::new(),
    };

    // TODO: restrict origins once the screener UI has a fixed host
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
