use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Request body of the `send-email-notification` function. Fields are parsed
/// as optional so that a missing field yields the contract's 400 response
/// instead of a framework rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub event_type: Option<String>,
    pub candidate_id: Option<Uuid>,
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    pub data: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<Uuid>,
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Internal email event assembled by the workflow orchestrator before it is
/// handed to the relay.
#[derive(Debug, Clone)]
pub struct EmailEvent {
    pub event_type: String,
    pub candidate_id: Uuid,
    pub recipient_email: String,
    pub recipient_name: Option<String>,
    pub data: JsonValue,
}

pub mod events {
    pub const INTERVIEW_SCHEDULED: &str = "interview_scheduled";
    pub const FEEDBACK_SUBMITTED: &str = "feedback_submitted";
    pub const OFFER_APPROVED: &str = "offer_approved";
    pub const OFFER_REJECTED: &str = "offer_rejected";
    pub const OFFER_ACKNOWLEDGED: &str = "offer_acknowledged";
    pub const OFFER_DECLINED: &str = "offer_declined";
    pub const OFFER_RESUBMITTED: &str = "offer_resubmitted";
}
