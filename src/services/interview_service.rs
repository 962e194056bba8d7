use crate::dto::workflow_dto::ScheduleInterviewPayload;
use crate::error::Result;
use crate::models::interview::{Interview, INTERVIEW_CANCELLED, INTERVIEW_COMPLETED};
use sqlx::PgPool;
use uuid::Uuid;

pub const DEFAULT_DURATION_MINUTES: i32 = 60;

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Interview>> {
        let interview = sqlx::query_as::<_, Interview>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(interview)
    }

    pub async fn scheduled_for_candidate(&self, candidate_id: Uuid) -> Result<Option<Interview>> {
        let interview = sqlx::query_as::<_, Interview>(
            "SELECT * FROM interviews WHERE candidate_id = $1 AND status = 'scheduled'",
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(interview)
    }

    pub async fn create(
        &self,
        candidate_id: Uuid,
        assignment_id: Uuid,
        payload: &ScheduleInterviewPayload,
    ) -> Result<Interview> {
        let interview = sqlx::query_as::<_, Interview>(
            r#"
            INSERT INTO interviews (
                candidate_id, assignment_id, interviewer_name, interviewer_email,
                interview_date, start_time, duration_minutes, location, meeting_link,
                is_online, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'scheduled')
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(assignment_id)
        .bind(&payload.interviewer_name)
        .bind(&payload.interviewer_email)
        .bind(payload.interview_date)
        .bind(payload.start_time)
        .bind(payload.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
        .bind(&payload.location)
        .bind(&payload.meeting_link)
        .bind(payload.is_online)
        .fetch_one(&self.pool)
        .await?;
        Ok(interview)
    }

    /// Same-interviewer reschedule: the existing row is mutated in place, no
    /// new interview is created and the assignment is untouched.
    pub async fn reschedule(
        &self,
        id: Uuid,
        payload: &ScheduleInterviewPayload,
    ) -> Result<Interview> {
        let interview = sqlx::query_as::<_, Interview>(
            r#"
            UPDATE interviews
            SET interview_date = $1, start_time = $2, duration_minutes = $3,
                location = $4, meeting_link = $5, is_online = $6, updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(payload.interview_date)
        .bind(payload.start_time)
        .bind(payload.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
        .bind(&payload.location)
        .bind(&payload.meeting_link)
        .bind(payload.is_online)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(interview)
    }

    pub async fn cancel(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE interviews SET status = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(INTERVIEW_CANCELLED)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn complete_with_feedback(&self, id: Uuid) -> Result<Interview> {
        let interview = sqlx::query_as::<_, Interview>(
            r#"
            UPDATE interviews
            SET status = $1, feedback_submitted = TRUE, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(INTERVIEW_COMPLETED)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(interview)
    }

    pub async fn list_for_interviewer(&self, interviewer_email: &str) -> Result<Vec<Interview>> {
        let interviews = sqlx::query_as::<_, Interview>(
            r#"
            SELECT * FROM interviews
            WHERE interviewer_email = $1
            ORDER BY interview_date DESC, start_time DESC
            "#,
        )
        .bind(interviewer_email)
        .fetch_all(&self.pool)
        .await?;
        Ok(interviews)
    }
}
