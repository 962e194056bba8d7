use crate::dto::user_dto::UpdateUserPayload;
use crate::error::{Error, Result};
use crate::models::user_role::{
    UserRole, ROLE_HR_ADMIN, ROLE_HR_MANAGER, ROLE_HR_STAFF, ROLE_INTERVIEWER, ROLE_PENDING,
};
use sqlx::PgPool;
use uuid::Uuid;

const KNOWN_ROLES: &[&str] = &[
    ROLE_HR_ADMIN,
    ROLE_HR_STAFF,
    ROLE_HR_MANAGER,
    ROLE_INTERVIEWER,
    ROLE_PENDING,
];

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<UserRole>> {
        let users =
            sqlx::query_as::<_, UserRole>("SELECT * FROM user_roles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }

    /// Admin-side role/activation update, also the approval path for accounts
    /// stuck in the `pending` role.
    pub async fn update(&self, id: Uuid, payload: &UpdateUserPayload) -> Result<UserRole> {
        if let Some(ref role) = payload.role {
            if !KNOWN_ROLES.contains(&role.as_str()) {
                return Err(Error::BadRequest(format!("Unknown role: {}", role)));
            }
        }

        let user = sqlx::query_as::<_, UserRole>(
            r#"
            UPDATE user_roles
            SET role = COALESCE($1, role),
                is_active = COALESCE($2, is_active),
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&payload.role)
        .bind(payload.is_active)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}
