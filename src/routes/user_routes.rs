use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use crate::dto::user_dto::UpdateUserPayload;
use crate::error::{Error, Result};
use crate::middleware::auth::AuthContext;
use crate::AppState;

pub async fn list_users(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<impl IntoResponse> {
    let perms = state.permission_service.permission_set(&ctx.role).await;
    if !perms.can_read("users") {
        return Err(Error::Forbidden("You are not allowed to view users".into()));
    }
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

/// Role/activation updates, including approving accounts stuck in `pending`.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    let perms = state.permission_service.permission_set(&ctx.role).await;
    if !perms.can_update("users") {
        return Err(Error::Forbidden(
            "You are not allowed to manage users".into(),
        ));
    }
    let user = state.user_service.update(id, &payload).await?;
    Ok(Json(user))
}
