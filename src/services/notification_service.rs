use crate::error::Result;
use crate::models::notification::Notification;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn notify(
        &self,
        user_id: Uuid,
        notification_type: &str,
        title: &str,
        message: &str,
        candidate_id: Option<Uuid>,
        proposal_id: Option<Uuid>,
    ) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (user_id, notification_type, title, message, candidate_id, proposal_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(notification_type)
        .bind(title)
        .bind(message)
        .bind(candidate_id)
        .bind(proposal_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(notification)
    }

    /// The workflow never fails because a bell notification could not be
    /// written; failures are logged and dropped.
    pub async fn notify_best_effort(
        &self,
        user_id: Uuid,
        notification_type: &str,
        title: &str,
        message: &str,
        candidate_id: Option<Uuid>,
        proposal_id: Option<Uuid>,
    ) {
        if let Err(err) = self
            .notify(user_id, notification_type, title, message, candidate_id, proposal_id)
            .await
        {
            tracing::warn!(error = ?err, notification_type, "failed to write in-app notification");
        }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 100
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notifications)
    }

    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND NOT is_read",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0)
    }

    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND NOT is_read",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
