use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::utils::token::generate_tracking_token;
use crate::workflow::status::CandidateStatus;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub position_applied: String,
    pub years_experience: Option<i32>,
    pub education: Option<String>,
    pub resume_url: Option<String>,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_application(&self, application: NewApplication) -> Result<Candidate> {
        let exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM candidates WHERE email = $1")
            .bind(&application.email)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_some() {
            return Err(Error::Conflict(
                "A candidate with this email address already exists".to_string(),
            ));
        }

        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (
                full_name, email, phone, national_id, position_applied,
                years_experience, education, resume_url, tracking_token, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&application.full_name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(&application.national_id)
        .bind(&application.position_applied)
        .bind(application.years_experience)
        .bind(&application.education)
        .bind(&application.resume_url)
        .bind(generate_tracking_token(32))
        .bind(CandidateStatus::New.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(candidate)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>("SELECT * FROM candidates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(candidate)
    }

    pub async fn get_by_tracking_token(&self, token: &str) -> Result<Option<Candidate>> {
        let candidate =
            sqlx::query_as::<_, Candidate>("SELECT * FROM candidates WHERE tracking_token = $1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;
        Ok(candidate)
    }

    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Candidate>> {
        let candidates = match status {
            Some(status) => {
                sqlx::query_as::<_, Candidate>(
                    "SELECT * FROM candidates WHERE status = $1 ORDER BY created_at DESC",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Candidate>("SELECT * FROM candidates ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(candidates)
    }

    /// Raw status write. Callers go through the workflow orchestrator, which
    /// validates the transition and appends the history row first.
    pub async fn update_status_row(
        &self,
        id: Uuid,
        status: CandidateStatus,
        updated_by: Uuid,
        updated_by_email: &str,
    ) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            UPDATE candidates
            SET status = $1, updated_by = $2, updated_by_email = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(status.as_str())
        .bind(updated_by)
        .bind(updated_by_email)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(candidate)
    }

    /// Personal-identification back-fill collected while HR prepares an offer.
    pub async fn update_personal_fields(
        &self,
        id: Uuid,
        national_id: Option<&str>,
        phone: Option<&str>,
        updated_by: Uuid,
        updated_by_email: &str,
    ) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            UPDATE candidates
            SET national_id = COALESCE($1, national_id),
                phone = COALESCE($2, phone),
                updated_by = $3,
                updated_by_email = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(national_id)
        .bind(phone)
        .bind(updated_by)
        .bind(updated_by_email)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(candidate)
    }

    pub async fn status_counts(&self) -> Result<std::collections::HashMap<String, i64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM candidates GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    pub async fn applications_last_7_days(&self) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT TO_CHAR(created_at, 'YYYY-MM-DD') as date, COUNT(*)
            FROM candidates
            WHERE created_at > NOW() - INTERVAL '7 days'
            GROUP BY TO_CHAR(created_at, 'YYYY-MM-DD')
            ORDER BY date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
