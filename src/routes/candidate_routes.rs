use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::candidate_dto::{DailyCount, DashboardStats, UpdateStatusPayload};
use crate::error::{Error, Result};
use crate::middleware::auth::AuthContext;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CandidateListQuery {
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/hr/candidates",
    params(
        ("status" = Option<String>, Query, description = "Filter by pipeline status")
    ),
    responses(
        (status = 200, description = "List of candidates"),
        (status = 403, description = "Caller has no HR role")
    )
)]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.list(query.status.as_deref()).await?;
    Ok(Json(candidates))
}

#[utoipa::path(
    get,
    path = "/api/hr/candidates/{id}",
    params(
        ("id" = String, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate detail"),
        (status = 404, description = "Candidate not found")
    )
)]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".into()))?;
    Ok(Json(candidate))
}

pub async fn get_candidate_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    // 404 for unknown candidates instead of an empty history
    state
        .candidate_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".into()))?;
    let history = state.history_service.list_for_candidate(id).await?;
    Ok(Json(history))
}

pub async fn update_candidate_status(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse> {
    let perms = state.permission_service.permission_set(&ctx.role).await;
    if !perms.can_update("candidates") {
        return Err(Error::Forbidden(
            "You are not allowed to update candidates".into(),
        ));
    }
    let candidate = state
        .workflow_service
        .update_status(id, &payload.status, payload.note, &ctx)
        .await?;
    Ok(Json(candidate))
}

pub async fn dashboard_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let status_counts = state.candidate_service.status_counts().await?;
    let applications_last_7_days = state
        .candidate_service
        .applications_last_7_days()
        .await?
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect();
    Ok(Json(DashboardStats {
        status_counts,
        applications_last_7_days,
    }))
}
