use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::middleware::auth::AuthContext;
use crate::AppState;

pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<impl IntoResponse> {
    let notifications = state
        .notification_service
        .list_for_user(ctx.user_id)
        .await?;
    Ok(Json(notifications))
}

pub async fn unread_count(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<impl IntoResponse> {
    let count = state.notification_service.unread_count(ctx.user_id).await?;
    Ok(Json(json!({ "unread": count })))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let updated = state
        .notification_service
        .mark_read(id, ctx.user_id)
        .await?;
    if updated == 0 {
        return Err(Error::NotFound("Notification not found".into()));
    }
    Ok(Json(json!({ "updated": updated })))
}

pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<impl IntoResponse> {
    let updated = state.notification_service.mark_all_read(ctx.user_id).await?;
    Ok(Json(json!({ "updated": updated })))
}
