use std::sync::Arc;

use crate::config::Config;
use crate::explain::ExplainEngine;
use crate::history::RunHistoryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable engine config (stopwords). Explain calls share it without locking.
    pub engine: Arc<ExplainEngine>,
    /// Pluggable run history. Postgres when DATABASE_URL is set, disabled otherwise.
    pub run_history: Arc<dyn RunHistoryStore>,
}
