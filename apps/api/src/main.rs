mod config;
mod errors;
mod impact;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::impact::engine::{ImpactAnalyzer, ImpactEngine};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Impact API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the keyword taxonomy once; every request reuses it read-only
    let engine = ImpactEngine::with_defaults()?;
    info!(
        "Impact engine ready: {} patterns, {} agents, {} skills",
        engine.taxonomy().map_or(0, |t| t.pattern_count()),
        engine.agent_catalog().len(),
        engine.skill_catalog().len()
    );
    info!(
        "Accepting up to {} tasks per request",
        config.max_tasks_per_request
    );

    let state = AppState::new(config.clone(), engine);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
