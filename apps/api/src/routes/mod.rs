pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::explain::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Explain API
        .route("/api/v1/explain", post(handlers::handle_explain))
        .route("/api/v1/explain/runs", get(handlers::handle_list_runs))
        .route("/api/v1/explain/runs/:id", get(handlers::handle_get_run))
        .with_state(state)
}
