use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::history::{NewExplainRun, RunHistoryStore};
use crate::models::explain_run::ExplainRunRow;

/// Postgres-backed run history (`explain_runs` table). Append-only.
pub struct PgRunHistoryStore {
    pool: PgPool,
}

impl PgRunHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunHistoryStore for PgRunHistoryStore {
    async fn record(&self, run: &NewExplainRun) -> Result<Uuid> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO explain_runs
                (id, org_key, user_id, resume_text, job_description_text,
                 score, summary, result, job_id, candidate_id, application_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(id)
        .bind(&run.org_key)
        .bind(&run.user_id)
        .bind(&run.resume_text)
        .bind(&run.job_description_text)
        .bind(run.score)
        .bind(&run.summary)
        .bind(&run.result)
        .bind(run.job_id)
        .bind(run.candidate_id)
        .bind(run.application_id)
        .execute(&self.pool)
        .await
        .context("Failed to insert explain run")?;

        info!(
            "Inserted explain run {id} for org {} (score {})",
            run.org_key, run.score
        );
        Ok(id)
    }

    async fn list_recent(&self, org_key: &str, limit: i64) -> Result<Vec<ExplainRunRow>> {
        Ok(sqlx::query_as::<_, ExplainRunRow>(
            r#"
            SELECT * FROM explain_runs
            WHERE org_key = $1
            ORDER BY created_at DESC, id
            LIMIT $2
            "#,
        )
        .bind(org_key)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, org_key: &str, id: Uuid) -> Result<Option<ExplainRunRow>> {
        Ok(sqlx::query_as::<_, ExplainRunRow>(
            "SELECT * FROM explain_runs WHERE id = $1 AND org_key = $2",
        )
        .bind(id)
        .bind(org_key)
        .fetch_optional(&self.pool)
        .await?)
    }
}
