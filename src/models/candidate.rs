use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub position_applied: String,
    pub years_experience: Option<i32>,
    pub education: Option<String>,
    pub resume_url: Option<String>,
    pub tracking_token: String,
    pub status: String,
    pub updated_by: Option<Uuid>,
    pub updated_by_email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
