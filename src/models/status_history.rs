use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only audit row for a candidate status transition. Write-only from
/// the application's perspective; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusHistory {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub from_status: String,
    pub to_status: String,
    pub changed_by: Option<Uuid>,
    pub changed_by_email: String,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
