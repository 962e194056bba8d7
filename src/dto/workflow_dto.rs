use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShortlistPayload {
    #[validate(length(min = 1))]
    pub interviewer_name: String,
    #[validate(email)]
    pub interviewer_email: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleInterviewPayload {
    #[validate(length(min = 1))]
    pub interviewer_name: String,
    #[validate(email)]
    pub interviewer_email: String,
    pub interview_date: NaiveDate,
    pub start_time: NaiveTime,
    #[validate(range(min = 15, max = 480))]
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub is_online: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub competency_scores: BTreeMap<String, i32>,
    pub core_value_scores: BTreeMap<String, i32>,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub overall_opinion: Option<String>,
    pub decision: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOfferPayload {
    #[validate(length(min = 1))]
    pub position_title: String,
    pub job_level: Option<String>,
    pub job_grade: Option<String>,
    pub department: Option<String>,
    pub base_salary: Decimal,
    pub allowance: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    // personal-identification back-fill collected during offer preparation
    pub national_id: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResubmitOfferPayload {
    #[validate(length(min = 1))]
    pub position_title: Option<String>,
    pub job_level: Option<String>,
    pub job_grade: Option<String>,
    pub department: Option<String>,
    pub base_salary: Option<Decimal>,
    pub allowance: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
}

/// Shared by the HR Manager decision and the interviewer acknowledgment.
/// A rejection must carry notes; an approval ignores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionPayload {
    pub approve: bool,
    pub notes: Option<String>,
}

impl DecisionPayload {
    pub fn rejection_notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferFieldsPayload {
    pub recommended_salary: Option<Decimal>,
    pub recommended_position: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_rejection_notes_count_as_missing() {
        let payload = DecisionPayload {
            approve: false,
            notes: Some("   ".into()),
        };
        assert_eq!(payload.rejection_notes(), None);

        let payload = DecisionPayload {
            approve: false,
            notes: Some("salary too low".into()),
        };
        assert_eq!(payload.rejection_notes(), Some("salary too low"));

        let payload = DecisionPayload {
            approve: true,
            notes: None,
        };
        assert_eq!(payload.rejection_notes(), None);
    }
}
