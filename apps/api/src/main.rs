mod admin;
mod config;
mod errors;
mod layout;
mod ledger;
mod models;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::default_field_config;
use crate::ledger::LedgerService;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::build_blob_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing backend variables)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Meadow API v{}", env!("CARGO_PKG_VERSION"));

    if config.uses_default_admin_secret() {
        warn!("ADMIN_SECRET is not set; using the default shared secret. Set it in production!");
    }

    // Initialize blob storage and hydrate the ledger
    let store = build_blob_store(&config.blob_backend).await?;
    info!("Blob store initialized (backend: {})", store.name());
    let ledger = LedgerService::load(store, config.blob_key.clone()).await;

    let field_config = default_field_config();
    info!(
        "Meadow field config: one element per {} units, render cap {}",
        crate::ledger::UNIT,
        field_config.render_cap
    );

    let state = AppState::new(ledger, config.clone(), field_config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
