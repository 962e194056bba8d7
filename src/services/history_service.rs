use crate::error::Result;
use crate::models::status_history::StatusHistory;
use crate::workflow::status::CandidateStatus;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct HistoryService {
    pool: PgPool,
}

impl HistoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn append(
        &self,
        candidate_id: Uuid,
        from_status: CandidateStatus,
        to_status: CandidateStatus,
        changed_by: Uuid,
        changed_by_email: &str,
        note: Option<&str>,
    ) -> Result<StatusHistory> {
        let row = sqlx::query_as::<_, StatusHistory>(
            r#"
            INSERT INTO status_history (candidate_id, from_status, to_status, changed_by, changed_by_email, note)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(from_status.as_str())
        .bind(to_status.as_str())
        .bind(changed_by)
        .bind(changed_by_email)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_for_candidate(&self, candidate_id: Uuid) -> Result<Vec<StatusHistory>> {
        let rows = sqlx::query_as::<_, StatusHistory>(
            "SELECT * FROM status_history WHERE candidate_id = $1 ORDER BY created_at ASC",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
