use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Binding of a candidate to an interviewer. Superseded rows are kept with
/// `is_active = false`; a partial unique index guarantees at most one active
/// assignment per candidate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateAssignment {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub interviewer_name: String,
    pub interviewer_email: String,
    pub status: String,
    pub note: Option<String>,
    pub is_active: bool,
    pub assigned_by: Option<Uuid>,
    pub assigned_by_email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
