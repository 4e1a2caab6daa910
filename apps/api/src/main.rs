mod config;
mod db;
mod errors;
mod explain;
mod history;
mod identity;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::explain::tokenizer::Stopwords;
use crate::explain::ExplainEngine;
use crate::history::{DisabledRunHistoryStore, PgRunHistoryStore, RunHistoryStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    // Explain engine (stopwords are the only tunable)
    let engine = Arc::new(ExplainEngine::new(
        Stopwords::default().with_extra(&config.extra_stopwords),
    ));
    info!("Explain engine ready (stopwords: {})", engine.stopwords_version());

    // Run history is optional: without a database, runs are simply not recorded
    let run_history: Arc<dyn RunHistoryStore> = match &config.database_url {
        Some(url) => Arc::new(PgRunHistoryStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; explain run history disabled");
            Arc::new(DisabledRunHistoryStore)
        }
    };

    let state = AppState {
        config: config.clone(),
        engine,
        run_history,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
