//! Post payloads, the draft/published status set, and publish stamping.
//!
//! A post is stamped with `published_at` whenever a create or update sets its
//! status to `published`. Moving back to `draft` never clears the stamp.

use serde::Deserialize;

use crate::error::CoreError;
use crate::partial_update::{ColumnValue, UpdateSet};
use crate::types::{DbId, Timestamp};
use crate::validation::{optional_text, require_one_of, require_text};

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";

/// Status assigned when a create payload omits one.
pub const DEFAULT_STATUS: &str = STATUS_DRAFT;

/// Must match the `ck_posts_status` check constraint.
pub const VALID_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PUBLISHED];

pub const PUBLISHED_AT: &str = "published_at";

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Request body for `POST /posts`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub user_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub body: String,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
    pub media_url: Option<String>,
}

/// A validated post ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub user_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub body: String,
    pub status: String,
    pub media_url: Option<String>,
    pub published_at: Option<Timestamp>,
}

impl CreatePost {
    /// Validate the payload. A post created as `published` is stamped with `now`.
    pub fn validate(self, now: Timestamp) -> Result<NewPost, CoreError> {
        let status = match self.status.as_deref() {
            Some(status) => require_one_of(status, validate_status)?,
            None => DEFAULT_STATUS.to_string(),
        };
        let published_at = (status == STATUS_PUBLISHED).then_some(now);

        Ok(NewPost {
            user_id: self.user_id,
            category_id: self.category_id,
            title: require_text("title", &self.title)?,
            body: require_text("body", &self.body)?,
            status,
            media_url: self.media_url.as_deref().and_then(optional_text),
            published_at,
        })
    }
}

/// Request body for `PATCH /posts/{id}`.
///
/// `media_url: ""` clears the stored URL; `media_url: null` leaves it alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePost {
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    pub media_url: Option<String>,
}

impl UpdatePost {
    pub fn resolve(&self, updated_by: Option<DbId>, now: Timestamp) -> Result<UpdateSet, CoreError> {
        let status = self
            .status
            .as_deref()
            .map(|v| require_one_of(v, validate_status))
            .transpose()?;
        let publishing = status.as_deref() == Some(STATUS_PUBLISHED);

        let mut set = UpdateSet::new();
        set.set_if_present("category_id", self.category_id)
            .set_if_present(
                "title",
                self.title
                    .as_deref()
                    .map(|v| require_text("title", v))
                    .transpose()?,
            )
            .set_if_present(
                "body",
                self.body
                    .as_deref()
                    .map(|v| require_text("body", v))
                    .transpose()?,
            )
            .set_if_present("status", status)
            .set_if_present(
                "media_url",
                self.media_url
                    .as_deref()
                    .map(|v| ColumnValue::OptionalText(optional_text(v))),
            );

        if publishing {
            set.set(PUBLISHED_AT, now);
        }
        set.finish(now, updated_by)
    }
}
