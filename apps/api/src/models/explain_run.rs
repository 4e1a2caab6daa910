use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted explain run. Reads are always scoped by `org_key`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExplainRunRow {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
}
