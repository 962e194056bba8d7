use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::models::user_role::{
    ROLE_HR_ADMIN, ROLE_HR_MANAGER, ROLE_HR_STAFF, ROLE_INTERVIEWER,
};
use crate::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    pub exp: usize,
}

/// Resolved identity attached to the request after the role lookup. Handlers
/// and the workflow orchestrator take this explicitly instead of reading any
/// ambient session state.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

pub const HR_ROLES: &[&str] = &[ROLE_HR_ADMIN, ROLE_HR_STAFF, ROLE_HR_MANAGER];
pub const MANAGER_ROLES: &[&str] = &[ROLE_HR_ADMIN, ROLE_HR_MANAGER];
pub const INTERVIEWER_ROLES: &[&str] = &[ROLE_HR_ADMIN, ROLE_INTERVIEWER];
pub const ADMIN_ROLES: &[&str] = &[ROLE_HR_ADMIN];
pub const ACTIVE_ROLES: &[&str] = &[
    ROLE_HR_ADMIN,
    ROLE_HR_STAFF,
    ROLE_HR_MANAGER,
    ROLE_INTERVIEWER,
];

fn decode_claims(headers: &axum::http::HeaderMap) -> Result<Claims, Response> {
    let Some(auth_header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"missing_authorization"})),
        )
            .into_response());
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"bad_authorization"})),
        )
            .into_response());
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"unsupported_scheme"})),
        )
            .into_response());
    };

    let config = crate::config::get_config();
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"invalid_token"})),
        )
            .into_response()
    })
}

async fn guard(state: AppState, mut req: Request, next: Next, allowed: &[&str]) -> Response {
    let claims = match decode_claims(req.headers()) {
        Ok(claims) => claims,
        Err(resp) => return resp,
    };
    let Ok(user_id) = Uuid::parse_str(&claims.sub) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"invalid_token"})),
        )
            .into_response();
    };

    // Absent row, pending role, inactive flag, and lookup failures all land
    // here: the caller has no permissions until an admin approves them.
    let Some(user) = state.permission_service.resolve_active(user_id).await else {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error":"pending_approval"})),
        )
            .into_response();
    };

    if !allowed.iter().any(|r| r.eq_ignore_ascii_case(&user.role)) {
        return (StatusCode::FORBIDDEN, Json(json!({"error":"forbidden"}))).into_response();
    }

    req.extensions_mut().insert(AuthContext {
        user_id,
        email: user.email,
        role: user.role,
    });
    next.run(req).await
}

pub async fn require_hr(State(state): State<AppState>, req: Request, next: Next) -> Response {
    guard(state, req, next, HR_ROLES).await
}

pub async fn require_manager(State(state): State<AppState>, req: Request, next: Next) -> Response {
    guard(state, req, next, MANAGER_ROLES).await
}

pub async fn require_interviewer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    guard(state, req, next, INTERVIEWER_ROLES).await
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    guard(state, req, next, ADMIN_ROLES).await
}

pub async fn require_active(State(state): State<AppState>, req: Request, next: Next) -> Response {
    guard(state, req, next, ACTIVE_ROLES).await
}
