pub mod assignment_service;
pub mod candidate_service;
pub mod email_relay_service;
pub mod feedback_service;
pub mod history_service;
pub mod interview_service;
pub mod notification_service;
pub mod permission_service;
pub mod proposal_service;
pub mod user_service;
pub mod workflow_service;
