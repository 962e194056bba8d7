pub mod candidate_routes;
pub mod email_function;
pub mod health;
pub mod notification_routes;
pub mod public;
pub mod user_routes;
pub mod workflow_routes;
