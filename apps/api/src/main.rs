mod config;
mod errors;
mod routes;
mod state;
mod tools;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "ats_api={level},ats_core={level}",
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    let weights = &config.scoring.weights;
    info!(
        "Scoring weights: similarity={} keyword={} skills={} compliance={}",
        weights.similarity, weights.keyword, weights.skills, weights.compliance
    );
    if (weights.total() - 1.0).abs() > 1e-9 {
        tracing::warn!(
            "Scoring weights sum to {}, overall score may leave the 0-100 range",
            weights.total()
        );
    }

    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "Failed to create upload directory '{}'",
            config.upload_dir.display()
        )
    })?;
    info!("Upload directory: {}", config.upload_dir.display());

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let port = config.port;
    let state = AppState::new(config);
    info!("Registered {} tools", state.tools.descriptors().len());

    let app = build_router(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
