use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewFeedback {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub candidate_id: Uuid,
    pub interviewer_email: String,
    pub competency_scores: JsonValue,
    pub core_value_scores: JsonValue,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub overall_opinion: Option<String>,
    pub total_score: i32,
    pub max_score: i32,
    pub percentage: i32,
    pub decision: String,
    pub recommended_salary: Option<Decimal>,
    pub recommended_position: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
