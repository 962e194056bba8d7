use crate::error::Result;
use crate::models::user_role::{
    RolePermission, UserRole, ROLE_HR_ADMIN, ROLE_HR_MANAGER, ROLE_HR_STAFF, ROLE_INTERVIEWER,
    ROLE_PENDING,
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PermissionService {
    pool: PgPool,
}

impl PermissionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolves the caller's role row, gating on `is_active` and the
    /// `pending` placeholder role. Lookup failures are swallowed: a caller
    /// whose role cannot be read has no permissions.
    pub async fn resolve_active(&self, user_id: Uuid) -> Option<UserRole> {
        match self.fetch_role(user_id).await {
            Ok(Some(user)) if user.is_active && user.role != ROLE_PENDING => Some(user),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(error = ?err, %user_id, "role lookup failed, denying access");
                None
            }
        }
    }

    async fn fetch_role(&self, user_id: Uuid) -> Result<Option<UserRole>> {
        let user = sqlx::query_as::<_, UserRole>("SELECT * FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRole>> {
        let user = sqlx::query_as::<_, UserRole>(
            "SELECT * FROM user_roles WHERE email = $1 AND is_active",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Picks one active holder of the given role, oldest account first.
    /// Used to address the HR Manager when an offer enters approval.
    pub async fn find_one_by_role(&self, role: &str) -> Result<Option<UserRole>> {
        let user = sqlx::query_as::<_, UserRole>(
            r#"
            SELECT * FROM user_roles
            WHERE role = $1 AND is_active
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Loads the permission matrix for a role. Errors degrade to an empty
    /// set, which answers false to every capability check.
    pub async fn permission_set(&self, role: &str) -> PermissionSet {
        let rows = sqlx::query_as::<_, RolePermission>(
            "SELECT * FROM role_permissions WHERE role = $1",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = ?err, role, "permission matrix lookup failed");
            Vec::new()
        });
        PermissionSet::new(role, rows)
    }
}

/// Capability checks as pure functions of the loaded matrix rows: exact
/// resource-name lookup, false on miss.
#[derive(Debug, Clone)]
pub struct PermissionSet {
    role: String,
    rows: Vec<RolePermission>,
}

impl PermissionSet {
    pub fn new(role: &str, rows: Vec<RolePermission>) -> Self {
        Self {
            role: role.to_string(),
            rows,
        }
    }

    fn find(&self, resource: &str) -> Option<&RolePermission> {
        self.rows.iter().find(|row| row.resource == resource)
    }

    pub fn can_create(&self, resource: &str) -> bool {
        self.find(resource).map(|r| r.can_create).unwrap_or(false)
    }

    pub fn can_read(&self, resource: &str) -> bool {
        self.find(resource).map(|r| r.can_read).unwrap_or(false)
    }

    pub fn can_update(&self, resource: &str) -> bool {
        self.find(resource).map(|r| r.can_update).unwrap_or(false)
    }

    pub fn can_delete(&self, resource: &str) -> bool {
        self.find(resource).map(|r| r.can_delete).unwrap_or(false)
    }

    pub fn is_hr_admin(&self) -> bool {
        self.role == ROLE_HR_ADMIN
    }

    pub fn is_hr_staff(&self) -> bool {
        self.role == ROLE_HR_STAFF
    }

    pub fn is_hr_manager(&self) -> bool {
        self.role == ROLE_HR_MANAGER
    }

    pub fn is_interviewer(&self) -> bool {
        self.role == ROLE_INTERVIEWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(role: &str, resource: &str, c: bool, r: bool, u: bool, d: bool) -> RolePermission {
        RolePermission {
            id: Uuid::new_v4(),
            role: role.into(),
            resource: resource.into(),
            can_create: c,
            can_read: r,
            can_update: u,
            can_delete: d,
        }
    }

    #[test]
    fn capability_checks_follow_matrix_rows() {
        let set = PermissionSet::new(
            "hr_staff",
            vec![
                row("hr_staff", "candidates", true, true, true, false),
                row("hr_staff", "proposals", true, true, true, false),
            ],
        );
        assert!(set.can_create("candidates"));
        assert!(set.can_read("candidates"));
        assert!(set.can_update("proposals"));
        assert!(!set.can_delete("candidates"));
    }

    #[test]
    fn unknown_resource_defaults_to_false() {
        let set = PermissionSet::new(
            "hr_staff",
            vec![row("hr_staff", "candidates", true, true, true, true)],
        );
        assert!(!set.can_read("users"));
        assert!(!set.can_create("Candidates")); // exact-name lookup
    }

    #[test]
    fn empty_set_denies_everything() {
        let set = PermissionSet::new("interviewer", Vec::new());
        assert!(!set.can_create("feedback"));
        assert!(!set.can_read("feedback"));
        assert!(!set.can_update("feedback"));
        assert!(!set.can_delete("feedback"));
    }

    #[test]
    fn identity_flags_track_role() {
        assert!(PermissionSet::new("hr_admin", Vec::new()).is_hr_admin());
        assert!(PermissionSet::new("hr_manager", Vec::new()).is_hr_manager());
        assert!(PermissionSet::new("interviewer", Vec::new()).is_interviewer());
        let staff = PermissionSet::new("hr_staff", Vec::new());
        assert!(staff.is_hr_staff());
        assert!(!staff.is_hr_admin());
    }
}
