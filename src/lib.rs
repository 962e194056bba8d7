pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod workflow;

use crate::services::{
    candidate_service::CandidateService, email_relay_service::EmailRelayService,
    feedback_service::FeedbackService, history_service::HistoryService,
    interview_service::InterviewService, notification_service::NotificationService,
    permission_service::PermissionService, proposal_service::ProposalService,
    user_service::UserService, workflow_service::WorkflowService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub candidate_service: CandidateService,
    pub history_service: HistoryService,
    pub interview_service: InterviewService,
    pub feedback_service: FeedbackService,
    pub proposal_service: ProposalService,
    pub notification_service: NotificationService,
    pub email_relay_service: EmailRelayService,
    pub permission_service: PermissionService,
    pub user_service: UserService,
    pub workflow_service: WorkflowService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let candidate_service = CandidateService::new(pool.clone());
        let history_service = HistoryService::new(pool.clone());
        let interview_service = InterviewService::new(pool.clone());
        let feedback_service = FeedbackService::new(pool.clone());
        let proposal_service = ProposalService::new(pool.clone());
        let notification_service = NotificationService::new(pool.clone());
        let email_relay_service = EmailRelayService::new(pool.clone());
        let permission_service = PermissionService::new(pool.clone());
        let user_service = UserService::new(pool.clone());
        let workflow_service = WorkflowService::new(pool.clone());

        Self {
            pool,
            candidate_service,
            history_service,
            interview_service,
            feedback_service,
            proposal_service,
            notification_service,
            email_relay_service,
            permission_service,
            user_service,
            workflow_service,
        }
    }
}
