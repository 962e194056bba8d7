use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub candidate_id: Option<Uuid>,
    pub proposal_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: Option<DateTime<Utc>>,
}
