//! Comment row model and list filter.

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub post_id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub body: String,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Query parameters for `GET /comments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentListParams {
    /// Only comments on this post.
    pub post_id: Option<DbId>,
}
