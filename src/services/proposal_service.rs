use crate::dto::workflow_dto::{ResubmitOfferPayload, SendOfferPayload};
use crate::error::Result;
use crate::models::job_proposal::JobProposal;
use sqlx::PgPool;
use uuid::Uuid;

pub const OFFER_PENDING: &str = "pending";
pub const OFFER_SENT: &str = "sent";
pub const OFFER_ACCEPTED: &str = "accepted";
pub const OFFER_DECLINED: &str = "declined";

#[derive(Clone)]
pub struct ProposalService {
    pool: PgPool,
}

impl ProposalService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<JobProposal>> {
        let proposal =
            sqlx::query_as::<_, JobProposal>("SELECT * FROM job_proposals WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(proposal)
    }

    pub async fn list(&self) -> Result<Vec<JobProposal>> {
        let proposals = sqlx::query_as::<_, JobProposal>(
            "SELECT * FROM job_proposals ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(proposals)
    }

    pub async fn latest_for_candidate(&self, candidate_id: Uuid) -> Result<Option<JobProposal>> {
        let proposal = sqlx::query_as::<_, JobProposal>(
            r#"
            SELECT * FROM job_proposals
            WHERE candidate_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(proposal)
    }

    pub async fn create(
        &self,
        candidate_id: Uuid,
        payload: &SendOfferPayload,
        created_by: Uuid,
        created_by_email: &str,
    ) -> Result<JobProposal> {
        let proposal = sqlx::query_as::<_, JobProposal>(
            r#"
            INSERT INTO job_proposals (
                candidate_id, position_title, job_level, job_grade, department,
                base_salary, allowance, start_date, offer_status,
                created_by, created_by_email
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(&payload.position_title)
        .bind(&payload.job_level)
        .bind(&payload.job_grade)
        .bind(&payload.department)
        .bind(payload.base_salary)
        .bind(payload.allowance)
        .bind(payload.start_date)
        .bind(OFFER_PENDING)
        .bind(created_by)
        .bind(created_by_email)
        .fetch_one(&self.pool)
        .await?;
        Ok(proposal)
    }

    pub async fn hr_manager_approve(&self, id: Uuid, approver_email: &str) -> Result<JobProposal> {
        let proposal = sqlx::query_as::<_, JobProposal>(
            r#"
            UPDATE job_proposals
            SET hr_manager_approved = TRUE,
                hr_manager_approved_by = $1,
                hr_manager_approved_at = NOW(),
                hr_manager_rejection_notes = NULL,
                updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(approver_email)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(proposal)
    }

    pub async fn hr_manager_reject(&self, id: Uuid, notes: &str) -> Result<JobProposal> {
        let proposal = sqlx::query_as::<_, JobProposal>(
            r#"
            UPDATE job_proposals
            SET hr_manager_rejection_notes = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(notes)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(proposal)
    }

    pub async fn interviewer_acknowledge(
        &self,
        id: Uuid,
        approver_email: &str,
    ) -> Result<JobProposal> {
        let proposal = sqlx::query_as::<_, JobProposal>(
            r#"
            UPDATE job_proposals
            SET interviewer_acknowledged = TRUE,
                interviewer_acknowledged_by = $1,
                interviewer_acknowledged_at = NOW(),
                interviewer_rejection_notes = NULL,
                offer_status = $2,
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(approver_email)
        .bind(OFFER_SENT)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(proposal)
    }

    /// An interviewer rejection also rolls the HR Manager approval back, so
    /// the full two-stage chain re-runs once HR edits and resubmits.
    pub async fn interviewer_reject(&self, id: Uuid, notes: &str) -> Result<JobProposal> {
        let proposal = sqlx::query_as::<_, JobProposal>(
            r#"
            UPDATE job_proposals
            SET interviewer_rejection_notes = $1,
                hr_manager_approved = FALSE,
                hr_manager_approved_by = NULL,
                hr_manager_approved_at = NULL,
                updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(notes)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(proposal)
    }

    /// Resubmission restarts the approval from scratch: both rejection-note
    /// columns and both approval flags (with their stamps) are reset.
    pub async fn resubmit(&self, id: Uuid, payload: &ResubmitOfferPayload) -> Result<JobProposal> {
        let proposal = sqlx::query_as::<_, JobProposal>(
            r#"
            UPDATE job_proposals
            SET position_title = COALESCE($1, position_title),
                job_level = COALESCE($2, job_level),
                job_grade = COALESCE($3, job_grade),
                department = COALESCE($4, department),
                base_salary = COALESCE($5, base_salary),
                allowance = COALESCE($6, allowance),
                start_date = COALESCE($7, start_date),
                offer_status = $8,
                hr_manager_approved = FALSE,
                hr_manager_approved_by = NULL,
                hr_manager_approved_at = NULL,
                hr_manager_rejection_notes = NULL,
                interviewer_acknowledged = FALSE,
                interviewer_acknowledged_by = NULL,
                interviewer_acknowledged_at = NULL,
                interviewer_rejection_notes = NULL,
                updated_at = NOW()
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&payload.position_title)
        .bind(&payload.job_level)
        .bind(&payload.job_grade)
        .bind(&payload.department)
        .bind(payload.base_salary)
        .bind(payload.allowance)
        .bind(payload.start_date)
        .bind(OFFER_PENDING)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(proposal)
    }

    pub async fn set_offer_status(&self, id: Uuid, status: &str) -> Result<u64> {
        let result =
            sqlx::query("UPDATE job_proposals SET offer_status = $1, updated_at = NOW() WHERE id = $2")
                .bind(status)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }
}
