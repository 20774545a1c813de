//! Category payloads and their validation/update rules.

use serde::Deserialize;

use crate::error::CoreError;
use crate::partial_update::UpdateSet;
use crate::types::{DbId, Timestamp};
use crate::validation::require_text;

/// Request body for `POST /categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

/// A validated category ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}

impl CreateCategory {
    pub fn validate(self) -> Result<NewCategory, CoreError> {
        Ok(NewCategory {
            name: require_text("category name", &self.name)?,
        })
    }
}

/// Request body for `PATCH /categories/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
}

impl UpdateCategory {
    pub fn resolve(&self, updated_by: Option<DbId>, now: Timestamp) -> Result<UpdateSet, CoreError> {
        let mut set = UpdateSet::new();
        set.set_if_present(
            "name",
            self.name
                .as_deref()
                .map(|v| require_text("category name", v))
                .transpose()?,
        );
        set.finish(now, updated_by)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_create_trims_name() {
        let category = CreateCategory {
            name: " Footwear ".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(category.name, "Footwear");
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let err = CreateCategory { name: "\t".into() }.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: category name must not be blank"
        );
    }

    #[test]
    fn test_empty_update_fails() {
        assert_matches!(
            UpdateCategory::default().resolve(Some(2), Utc::now()),
            Err(CoreError::NoFields)
        );
    }

    #[test]
    fn test_update_resolves_name_and_audit() {
        let set = UpdateCategory {
            name: Some(" Sale ".into()),
        }
        .resolve(Some(2), Utc::now())
        .unwrap();
        assert_eq!(
            set.columns().collect::<Vec<_>>(),
            vec!["name", "updated_at", "updated_by"]
        );
    }
}
