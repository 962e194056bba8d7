use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const INTERVIEW_SCHEDULED: &str = "scheduled";
pub const INTERVIEW_CANCELLED: &str = "cancelled";
pub const INTERVIEW_COMPLETED: &str = "completed";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub assignment_id: Uuid,
    pub interviewer_name: String,
    pub interviewer_email: String,
    pub interview_date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub is_online: bool,
    pub status: String,
    pub feedback_submitted: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
