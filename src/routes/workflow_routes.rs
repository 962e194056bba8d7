use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::dto::workflow_dto::{
    DecisionPayload, FeedbackPayload, OfferFieldsPayload, ResubmitOfferPayload,
    ScheduleInterviewPayload, SendOfferPayload, ShortlistPayload,
};
use crate::error::{Error, Result};
use crate::middleware::auth::AuthContext;
use crate::AppState;

pub async fn shortlist_candidate(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ShortlistPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let perms = state.permission_service.permission_set(&ctx.role).await;
    if !perms.can_create("assignments") {
        return Err(Error::Forbidden(
            "You are not allowed to assign interviewers".into(),
        ));
    }
    let (candidate, assignment) = state.workflow_service.shortlist(id, &payload, &ctx).await?;
    Ok(Json(json!({
        "candidate": candidate,
        "assignment": assignment,
    })))
}

pub async fn schedule_interview(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ScheduleInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state
        .workflow_service
        .schedule_interview(id, &payload, &ctx)
        .await?;
    Ok(Json(interview))
}

pub async fn send_offer(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SendOfferPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let perms = state.permission_service.permission_set(&ctx.role).await;
    if !perms.can_create("proposals") {
        return Err(Error::Forbidden(
            "You are not allowed to create job proposals".into(),
        ));
    }
    let proposal = state.workflow_service.send_offer(id, &payload, &ctx).await?;
    Ok((StatusCode::CREATED, Json(proposal)))
}

pub async fn resubmit_offer(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResubmitOfferPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let proposal = state
        .workflow_service
        .resubmit_offer(id, &payload, &ctx)
        .await?;
    Ok(Json(proposal))
}

pub async fn list_proposals(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let proposals = state.proposal_service.list().await?;
    Ok(Json(proposals))
}

pub async fn get_proposal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let proposal = state
        .proposal_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Job proposal not found".into()))?;
    Ok(Json(proposal))
}

/// HR Manager approval/rejection, the first stage of the offer chain.
pub async fn manager_decision(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecisionPayload>,
) -> Result<impl IntoResponse> {
    let proposal = state
        .workflow_service
        .hr_manager_decision(id, &payload, &ctx)
        .await?;
    Ok(Json(proposal))
}

/// Interviewer acknowledgment, the second stage. A rejection here rolls the
/// HR Manager approval back.
pub async fn acknowledge_offer(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecisionPayload>,
) -> Result<impl IntoResponse> {
    let proposal = state
        .workflow_service
        .interviewer_decision(id, &payload, &ctx)
        .await?;
    Ok(Json(proposal))
}

pub async fn list_my_interviews(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<impl IntoResponse> {
    let interviews = state
        .interview_service
        .list_for_interviewer(&ctx.email)
        .await?;
    Ok(Json(interviews))
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FeedbackPayload>,
) -> Result<impl IntoResponse> {
    let feedback = state
        .workflow_service
        .submit_feedback(id, &payload, &ctx)
        .await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

pub async fn update_feedback_offer_fields(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OfferFieldsPayload>,
) -> Result<impl IntoResponse> {
    let perms = state.permission_service.permission_set(&ctx.role).await;
    if !perms.can_update("feedback") {
        return Err(Error::Forbidden(
            "You are not allowed to update feedback".into(),
        ));
    }
    state
        .feedback_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Feedback not found".into()))?;
    let feedback = state.feedback_service.update_offer_fields(id, &payload).await?;
    Ok(Json(feedback))
}
