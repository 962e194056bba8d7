use axum::{extract::State, http::HeaderMap, response::IntoResponse, Extension, Json};

use crate::dto::notification_dto::{SendEmailRequest, SendEmailResponse};
use crate::error::Result;
use crate::middleware::auth::AuthContext;
use crate::AppState;

/// The server-side relay function. Clients compose the payload; this endpoint
/// resolves the per-event webhook settings, attaches the bearer secret, and
/// enforces the per-event send quota. 400/404/429/500 come out of the relay
/// service as typed errors; a disabled event type is a 200 with
/// `success: false`.
#[utoipa::path(
    post,
    path = "/api/functions/send-email-notification",
    responses(
        (status = 200, description = "Relayed, or event type disabled"),
        (status = 400, description = "Missing event_type, candidate_id or recipient_email"),
        (status = 404, description = "No configuration for the event type"),
        (status = 429, description = "Per-event send quota reached"),
        (status = 500, description = "Upstream relay call failed")
    )
)]
pub async fn send_email_notification(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    headers: HeaderMap,
    Json(request): Json<SendEmailRequest>,
) -> Result<impl IntoResponse> {
    // Service callers may pass an explicit identity for quota accounting;
    // interactive callers are accounted under their own user id.
    let caller = headers
        .get("x-caller-id")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
        .unwrap_or_else(|| ctx.user_id.to_string());

    let receipt = state.email_relay_service.send(request, Some(caller)).await?;
    Ok(Json(SendEmailResponse {
        success: receipt.success,
        notification_id: receipt.notification_id,
        event_type: receipt.event_type,
        message: receipt.message,
    }))
}
