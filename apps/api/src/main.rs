mod ats;
mod config;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats::extract::FileTypeExtractor;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Upload limit: {} bytes, CORS origin: {}",
        config.max_upload_bytes, config.client_origin
    );

    let cors = build_cors(&config.client_origin)?;

    // Build app state
    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(FileTypeExtractor),
    };

    // Build router
    let app = build_router(state).layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `*` allows any origin; anything else is the single allowed origin, with credentials.
fn build_cors(client_origin: &str) -> Result<CorsLayer> {
    if client_origin == "*" {
        return Ok(CorsLayer::permissive());
    }

    let origin: HeaderValue = client_origin
        .parse()
        .with_context(|| format!("CLIENT_ORIGIN '{client_origin}' is not a valid header value"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}
