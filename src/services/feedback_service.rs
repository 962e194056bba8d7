use crate::dto::workflow_dto::{FeedbackPayload, OfferFieldsPayload};
use crate::error::{Error, Result};
use crate::models::feedback::InterviewFeedback;
use crate::workflow::rubric::RubricResult;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct FeedbackService {
    pool: PgPool,
}

impl FeedbackService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<InterviewFeedback>> {
        let feedback =
            sqlx::query_as::<_, InterviewFeedback>("SELECT * FROM interview_feedback WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(feedback)
    }

    pub async fn get_for_interview(&self, interview_id: Uuid) -> Result<Option<InterviewFeedback>> {
        let feedback = sqlx::query_as::<_, InterviewFeedback>(
            "SELECT * FROM interview_feedback WHERE interview_id = $1",
        )
        .bind(interview_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(feedback)
    }

    pub async fn create(
        &self,
        interview_id: Uuid,
        candidate_id: Uuid,
        interviewer_email: &str,
        payload: &FeedbackPayload,
        scores: &RubricResult,
    ) -> Result<InterviewFeedback> {
        if self.get_for_interview(interview_id).await?.is_some() {
            return Err(Error::Conflict(
                "Feedback has already been submitted for this interview".to_string(),
            ));
        }

        let feedback = sqlx::query_as::<_, InterviewFeedback>(
            r#"
            INSERT INTO interview_feedback (
                interview_id, candidate_id, interviewer_email,
                competency_scores, core_value_scores,
                strengths, weaknesses, overall_opinion,
                total_score, max_score, percentage, decision
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(interview_id)
        .bind(candidate_id)
        .bind(interviewer_email)
        .bind(serde_json::to_value(&payload.competency_scores)?)
        .bind(serde_json::to_value(&payload.core_value_scores)?)
        .bind(&payload.strengths)
        .bind(&payload.weaknesses)
        .bind(&payload.overall_opinion)
        .bind(scores.total_score)
        .bind(scores.max_score)
        .bind(scores.percentage)
        .bind(&payload.decision)
        .fetch_one(&self.pool)
        .await?;
        Ok(feedback)
    }

    /// HR back-fill during offer preparation. Scores and opinions stay
    /// immutable after submission; only these two columns may change.
    pub async fn update_offer_fields(
        &self,
        id: Uuid,
        payload: &OfferFieldsPayload,
    ) -> Result<InterviewFeedback> {
        let feedback = sqlx::query_as::<_, InterviewFeedback>(
            r#"
            UPDATE interview_feedback
            SET recommended_salary = COALESCE($1, recommended_salary),
                recommended_position = COALESCE($2, recommended_position),
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(payload.recommended_salary)
        .bind(&payload.recommended_position)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(feedback)
    }
}
