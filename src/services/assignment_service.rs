use crate::error::Result;
use crate::models::assignment::CandidateAssignment;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AssignmentService {
    pool: PgPool,
}

impl AssignmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn active_for_candidate(
        &self,
        candidate_id: Uuid,
    ) -> Result<Option<CandidateAssignment>> {
        let assignment = sqlx::query_as::<_, CandidateAssignment>(
            "SELECT * FROM candidate_assignments WHERE candidate_id = $1 AND is_active",
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(assignment)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<CandidateAssignment>> {
        let assignment = sqlx::query_as::<_, CandidateAssignment>(
            "SELECT * FROM candidate_assignments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(assignment)
    }

    pub async fn create(
        &self,
        candidate_id: Uuid,
        interviewer_name: &str,
        interviewer_email: &str,
        note: Option<&str>,
        assigned_by: Uuid,
        assigned_by_email: &str,
    ) -> Result<CandidateAssignment> {
        let assignment = sqlx::query_as::<_, CandidateAssignment>(
            r#"
            INSERT INTO candidate_assignments (
                candidate_id, interviewer_name, interviewer_email, status, note,
                is_active, assigned_by, assigned_by_email
            )
            VALUES ($1, $2, $3, 'pending', $4, TRUE, $5, $6)
            RETURNING *
            "#,
        )
        .bind(candidate_id)
        .bind(interviewer_name)
        .bind(interviewer_email)
        .bind(note)
        .bind(assigned_by)
        .bind(assigned_by_email)
        .fetch_one(&self.pool)
        .await?;
        Ok(assignment)
    }

    /// Supersedes the candidate's active assignment, if any. Rows are never
    /// deleted so the assignment history stays reconstructable.
    pub async fn deactivate_active_for(&self, candidate_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE candidate_assignments
            SET is_active = FALSE, status = 'superseded', updated_at = NOW()
            WHERE candidate_id = $1 AND is_active
            "#,
        )
        .bind(candidate_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_for_candidate(&self, candidate_id: Uuid) -> Result<Vec<CandidateAssignment>> {
        let assignments = sqlx::query_as::<_, CandidateAssignment>(
            "SELECT * FROM candidate_assignments WHERE candidate_id = $1 ORDER BY created_at DESC",
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(assignments)
    }
}
