//! User role names.
//!
//! These must match the `ck_users_role` check constraint in the users migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_AUTHOR: &str = "author";

/// Role assigned when a create payload omits one.
pub const DEFAULT_ROLE: &str = ROLE_AUTHOR;

pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_AUTHOR];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}
