use crate::dto::notification_dto::SendEmailRequest;
use crate::error::{Error, Result};
use crate::models::email_log::{EmailNotificationLog, NotificationConfig};
use reqwest::Client;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

/// Rolling one-minute quota per event type, counted from audit rows.
pub const SENDS_PER_MINUTE: i64 = 10;

#[derive(Debug)]
pub struct RelayReceipt {
    pub success: bool,
    pub notification_id: Option<Uuid>,
    pub event_type: String,
    pub message: Option<String>,
}

/// Server-side half of the outbound email pipeline. Looks up the per-event
/// webhook settings, attaches the bearer secret, posts the payload, and
/// records the attempt. The secret never reaches any client: only this
/// service reads `notification_config`.
#[derive(Clone)]
pub struct EmailRelayService {
    pool: PgPool,
    client: Client,
}

impl EmailRelayService {
    pub fn new(pool: PgPool) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build http client");
        Self { pool, client }
    }

    pub async fn send(
        &self,
        request: SendEmailRequest,
        caller: Option<String>,
    ) -> Result<RelayReceipt> {
        let event_type = request
            .event_type
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::BadRequest("event_type is required".to_string()))?;
        let recipient_email = request
            .recipient_email
            .filter(|e| !e.is_empty())
            .ok_or_else(|| Error::BadRequest("recipient_email is required".to_string()))?;
        let candidate_id = request
            .candidate_id
            .ok_or_else(|| Error::BadRequest("candidate_id is required".to_string()))?;

        let config = sqlx::query_as::<_, NotificationConfig>(
            "SELECT * FROM notification_config WHERE event_type = $1",
        )
        .bind(&event_type)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            Error::NotFound(format!(
                "No notification configuration found for event type '{}'",
                event_type
            ))
        })?;

        if !config.enabled {
            return Ok(RelayReceipt {
                success: false,
                notification_id: None,
                event_type,
                message: Some("Notifications for this event type are disabled".to_string()),
            });
        }

        // Read-then-act on purpose, matching the audited behavior: concurrent
        // senders can race past the quota by one or two.
        let recent: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM email_notifications
            WHERE event_type = $1 AND created_at > NOW() - INTERVAL '1 minute'
            "#,
        )
        .bind(&event_type)
        .fetch_one(&self.pool)
        .await?;
        if recent >= SENDS_PER_MINUTE {
            return Err(Error::RateLimited(format!(
                "Send limit of {} per minute reached for event type '{}'",
                SENDS_PER_MINUTE, event_type
            )));
        }

        let payload = json!({
            "event_type": event_type,
            "candidate_id": candidate_id,
            "recipient_email": recipient_email,
            "recipient_name": request.recipient_name,
            "data": request.data.unwrap_or_else(|| json!({})),
        });

        let log = sqlx::query_as::<_, EmailNotificationLog>(
            r#"
            INSERT INTO email_notifications (
                event_type, candidate_id, recipient_email, recipient_name, payload, status, created_by
            )
            VALUES ($1, $2, $3, $4, $5, 'pending', $6)
            RETURNING *
            "#,
        )
        .bind(&event_type)
        .bind(candidate_id)
        .bind(&recipient_email)
        .bind(&request.recipient_name)
        .bind(&payload)
        .bind(&caller)
        .fetch_one(&self.pool)
        .await?;

        let response = self
            .client
            .post(&config.webhook_url)
            .bearer_auth(&config.secret)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(resp) => {
                let http_status = resp.status().as_u16() as i32;
                let body = resp.text().await.unwrap_or_default();
                let ok = (200..300).contains(&http_status);
                self.record_outcome(log.id, ok, Some(http_status), &body).await?;
                if ok {
                    Ok(RelayReceipt {
                        success: true,
                        notification_id: Some(log.id),
                        event_type,
                        message: None,
                    })
                } else {
                    Err(Error::Internal(format!(
                        "Email relay upstream returned {}: {}",
                        http_status, body
                    )))
                }
            }
            Err(err) => {
                self.record_outcome(log.id, false, None, &err.to_string())
                    .await?;
                Err(Error::Internal(format!("Email relay call failed: {}", err)))
            }
        }
    }

    async fn record_outcome(
        &self,
        log_id: Uuid,
        sent: bool,
        http_status: Option<i32>,
        response_body: &str,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE email_notifications
            SET status = $1, http_status = $2, response_body = $3, updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(if sent { "sent" } else { "failed" })
        .bind(http_status)
        .bind(response_body)
        .bind(log_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
