//! User payloads and their validation/update rules.

use std::fmt;

use serde::Deserialize;

use crate::error::CoreError;
use crate::partial_update::UpdateSet;
use crate::roles::{validate_role, DEFAULT_ROLE};
use crate::types::{DbId, Timestamp};
use crate::validation::{require_email, require_one_of, require_password, require_text};

/// Request body for `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Defaults to `author` if omitted.
    pub role: Option<String>,
}

/// A validated user ready for insertion. The password is still plaintext;
/// the API layer hashes it before it reaches the store.
#[derive(Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl CreateUser {
    pub fn validate(self) -> Result<NewUser, CoreError> {
        let role = match self.role.as_deref() {
            Some(role) => require_one_of(role, validate_role)?,
            None => DEFAULT_ROLE.to_string(),
        };
        require_password(&self.password)?;

        Ok(NewUser {
            username: require_text("username", &self.username)?,
            email: require_email(&self.email)?,
            password: self.password,
            role,
        })
    }
}

/// Request body for `PATCH /users/{id}`. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UpdateUser {
    /// Resolve the columns to apply to user `user_id`.
    ///
    /// Without an acting user the target user is recorded as its own updater.
    pub fn resolve(
        &self,
        user_id: DbId,
        updated_by: Option<DbId>,
        now: Timestamp,
    ) -> Result<UpdateSet, CoreError> {
        let mut set = UpdateSet::new();
        set.set_if_present(
            "username",
            self.username
                .as_deref()
                .map(|v| require_text("username", v))
                .transpose()?,
        )
        .set_if_present(
            "email",
            self.email.as_deref().map(require_email).transpose()?,
        )
        .set_if_present(
            "role",
            self.role
                .as_deref()
                .map(|v| require_one_of(v, validate_role))
                .transpose()?,
        );

        set.finish(now, Some(updated_by.unwrap_or(user_id)))
    }
}
