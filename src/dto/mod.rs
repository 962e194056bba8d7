pub mod candidate_dto;
pub mod notification_dto;
pub mod user_dto;
pub mod workflow_dto;
