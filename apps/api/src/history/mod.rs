//! Run History — optional audit trail of explain runs.
//!
//! Persistence is best-effort: handlers compute and return the explain result
//! first, then hand the run to `record_detached`, which never blocks or fails
//! the response. `AppState` holds an `Arc<dyn RunHistoryStore>`; with no
//! `DATABASE_URL` configured it is `DisabledRunHistoryStore`.

pub mod postgres;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::explain::models::ExplainResult;
use crate::identity::IdentityContext;
use crate::models::explain_run::ExplainRunRow;

pub use postgres::PgRunHistoryStore;

/// Everything recorded for one explain call.
#[derive(Debug, Clone)]
pub struct NewExplainRun {
    pub org_key: String,
    pub user_id: String,
    pub resume_text: String,
    pub job_description_text: String,
    pub score: i32,
    pub summary: String,
    pub result: Value,
    pub job_id: Option<Uuid>,
    pub candidate_id: Option<Uuid>,
    pub application_id: Option<Uuid>,
}

/// Optional links from a run to the job / candidate / application records it was computed for.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunLinks {
    pub job_id: Option<Uuid>,
    pub candidate_id: Option<Uuid>,
    pub application_id: Option<Uuid>,
}

impl NewExplainRun {
    pub fn new(
        identity: &IdentityContext,
        resume_text: String,
        job_description_text: String,
        result: &ExplainResult,
        links: RunLinks,
    ) -> Self {
        Self {
            org_key: identity.org_key.clone(),
            user_id: identity.user_id.clone(),
            resume_text,
            job_description_text,
            score: result.score as i32,
            summary: result.summary.clone(),
            result: serde_json::to_value(result).unwrap_or(Value::Null),
            job_id: links.job_id,
            candidate_id: links.candidate_id,
            application_id: links.application_id,
        }
    }
}

/// Storage backend for explain runs. Swap implementations without touching handlers.
#[async_trait]
pub trait RunHistoryStore: Send + Sync {
    /// Persists a run and returns its id.
    async fn record(&self, run: &NewExplainRun) -> Result<Uuid>;

    /// Most recent runs for a tenant, newest first.
    async fn list_recent(&self, org_key: &str, limit: i64) -> Result<Vec<ExplainRunRow>>;

    /// A single run, only if it belongs to `org_key`.
    async fn get(&self, org_key: &str, id: Uuid) -> Result<Option<ExplainRunRow>>;
}

/// Used when no database is configured. Records nothing, finds nothing.
pub struct DisabledRunHistoryStore;

#[async_trait]
impl RunHistoryStore for DisabledRunHistoryStore {
    async fn record(&self, _run: &NewExplainRun) -> Result<Uuid> {
        debug!("Run history disabled; skipping record");
        Ok(Uuid::nil())
    }

    async fn list_recent(&self, _org_key: &str, _limit: i64) -> Result<Vec<ExplainRunRow>> {
        Ok(Vec::new())
    }

    async fn get(&self, _org_key: &str, _id: Uuid) -> Result<Option<ExplainRunRow>> {
        Ok(None)
    }
}

/// Fire-and-forget persistence. The returned handle is only for tests; callers drop it.
pub fn record_detached(
    store: Arc<dyn RunHistoryStore>,
    run: NewExplainRun,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match store.record(&run).await {
            Ok(id) => debug!("Recorded explain run {id} for org {}", run.org_key),
            Err(e) => warn!(
                "Failed to record explain run for org {} (score {}): {e:#}",
                run.org_key, run.score
            ),
        }
    })
}
