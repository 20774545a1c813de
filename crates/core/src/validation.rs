//! Field-level validation shared by every resource payload.
//!
//! All helpers return [`CoreError::Validation`] so handlers can propagate
//! them with `?` and get a 400 response.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Trim a required text field and reject it if nothing is left.
pub fn require_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

/// Trim an email address and check it against the email grammar.
pub fn require_email(value: &str) -> Result<String, CoreError> {
    let email = value.trim().to_string();
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(email)
}

/// Trim an optional text field. Blank input normalizes to `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Passwords are taken verbatim; only an empty password is rejected.
pub fn require_password(value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation("password must not be empty".into()));
    }
    Ok(())
}

/// Check a value against a closed set, mapping the message into a [`CoreError`].
pub fn require_one_of(
    value: &str,
    check: impl Fn(&str) -> Result<(), String>,
) -> Result<String, CoreError> {
    check(value).map_err(CoreError::Validation)?;
    Ok(value.to_string())
}
