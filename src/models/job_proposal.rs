use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Offer record subject to the two-stage approval: HR Manager first, then the
/// interviewer acknowledges. An interviewer rejection rolls the HR Manager
/// approval back so the whole chain restarts after HR edits.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobProposal {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub position_title: String,
    pub job_level: Option<String>,
    pub job_grade: Option<String>,
    pub department: Option<String>,
    pub base_salary: Decimal,
    pub allowance: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub offer_status: String,
    pub hr_manager_approved: bool,
    pub hr_manager_approved_by: Option<String>,
    pub hr_manager_approved_at: Option<DateTime<Utc>>,
    pub hr_manager_rejection_notes: Option<String>,
    pub interviewer_acknowledged: bool,
    pub interviewer_acknowledged_by: Option<String>,
    pub interviewer_acknowledged_at: Option<DateTime<Utc>>,
    pub interviewer_rejection_notes: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_by_email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
