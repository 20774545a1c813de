//! Comment payloads and their validation/update rules.

use serde::Deserialize;

use crate::error::CoreError;
use crate::partial_update::UpdateSet;
use crate::types::{DbId, Timestamp};
use crate::validation::require_text;

/// Request body for `POST /comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub post_id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub body: String,
}

/// A validated comment ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub post_id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub body: String,
}

impl CreateComment {
    pub fn validate(self) -> Result<NewComment, CoreError> {
        Ok(NewComment {
            post_id: self.post_id,
            user_id: self.user_id,
            category_id: self.category_id,
            body: require_text("comment body", &self.body)?,
        })
    }
}

/// Request body for `PATCH /comments/{id}`.
///
/// A comment cannot be moved to another post or author once created.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComment {
    pub body: Option<String>,
    pub category_id: Option<DbId>,
}

impl UpdateComment {
    pub fn resolve(&self, updated_by: Option<DbId>, now: Timestamp) -> Result<UpdateSet, CoreError> {
        let mut set = UpdateSet::new();
        set.set_if_present(
            "body",
            self.body
                .as_deref()
                .map(|v| require_text("comment body", v))
                .transpose()?,
        )
        .set_if_present("category_id", self.category_id);
        set.finish(now, updated_by)
    }
}
