use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmailNotificationLog {
    pub id: Uuid,
    pub event_type: String,
    pub candidate_id: Option<Uuid>,
    pub recipient_email: String,
    pub recipient_name: Option<String>,
    pub payload: JsonValue,
    pub status: String,
    pub http_status: Option<i32>,
    pub response_body: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-event webhook settings. Only the relay reads this table; the secret is
/// never serialized into any response.
#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct NotificationConfig {
    pub id: Uuid,
    pub event_type: String,
    pub webhook_url: String,
    pub secret: String,
    pub enabled: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
