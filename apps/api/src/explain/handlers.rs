//! Axum route handlers for the Explain API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::explain::models::ExplainResult;
use crate::history::{record_detached, NewExplainRun, RunLinks};
use crate::identity::IdentityContext;
use crate::models::explain_run::ExplainRunRow;
use crate::state::AppState;

const DEFAULT_RUN_PAGE: i64 = 20;
const MAX_RUN_PAGE: i64 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    #[serde(default, alias = "resume_text")]
    pub resume_text: Option<String>,
    #[serde(default, alias = "job_description_text")]
    pub job_description_text: Option<String>,
    #[serde(default, alias = "job_id")]
    pub job_id: Option<Uuid>,
    #[serde(default, alias = "candidate_id")]
    pub candidate_id: Option<Uuid>,
    #[serde(default, alias = "application_id")]
    pub application_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct RunListQuery {
    pub limit: Option<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/explain
///
/// Scores a resume against a job description and explains the score.
/// The run is persisted afterwards, detached: a history failure never changes the response.
pub async fn handle_explain(
    State(state): State<AppState>,
    identity: IdentityContext,
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResult>, AppError> {
    let max_chars = state.config.max_input_chars;
    let resume_text = require_text("resumeText", request.resume_text, max_chars)?;
    let job_description_text =
        require_text("jobDescriptionText", request.job_description_text, max_chars)?;

    let result = state.engine.explain(&resume_text, &job_description_text);

    debug!(
        "Explained run for org {}: score={} matched={} gaps={}",
        identity.org_key,
        result.score,
        result.skills.matched.len(),
        result.skills.gaps.len()
    );

    let links = RunLinks {
        job_id: request.job_id,
        candidate_id: request.candidate_id,
        application_id: request.application_id,
    };
    let run = NewExplainRun::new(&identity, resume_text, job_description_text, &result, links);
    record_detached(state.run_history.clone(), run);

    Ok(Json(result))
}

/// GET /api/v1/explain/runs?limit=
///
/// Recent runs for the caller's organization, newest first.
pub async fn handle_list_runs(
    State(state): State<AppState>,
    identity: IdentityContext,
    Query(params): Query<RunListQuery>,
) -> Result<Json<Vec<ExplainRunRow>>, AppError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_RUN_PAGE)
        .clamp(1, MAX_RUN_PAGE);
    let runs = state
        .run_history
        .list_recent(&identity.org_key, limit)
        .await?;
    Ok(Json(runs))
}

/// GET /api/v1/explain/runs/:id
pub async fn handle_get_run(
    State(state): State<AppState>,
    identity: IdentityContext,
    Path(run_id): Path<Uuid>,
) -> Result<Json<ExplainRunRow>, AppError> {
    let run = state
        .run_history
        .get(&identity.org_key, run_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Explain run {run_id} not found")))?;
    Ok(Json(run))
}

/// Presence and size checks belong to the transport; the engine accepts anything.
fn require_text(field: &str, value: Option<String>, max_chars: usize) -> Result<String, AppError> {
    let text = value.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    if text.chars().count() > max_chars {
        return Err(AppError::Validation(format!(
            "{field} exceeds {max_chars} characters"
        )));
    }
    Ok(text)
}
