use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::Candidate;

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitApplicationResponse {
    pub id: Uuid,
    pub tracking_token: String,
    pub status: String,
}

/// Public status lookup deliberately exposes only the pipeline position, not
/// the candidate's stored contact data.
#[derive(Debug, Serialize)]
pub struct ApplicationStatusResponse {
    pub position_applied: String,
    pub status: String,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl From<Candidate> for ApplicationStatusResponse {
    fn from(c: Candidate) -> Self {
        Self {
            position_applied: c.position_applied,
            status: c.status,
            submitted_at: c.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: String,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub status_counts: std::collections::HashMap<String, i64>,
    pub applications_last_7_days: Vec<DailyCount>,
}

#[derive(Debug, Serialize)]
pub struct DailyCount {
    pub date: String,
    pub count: i64,
}
