//! Post row model and list filter.

use cms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub post_id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub body: String,
    pub status: String,
    pub media_url: Option<String>,
    /// Set when the post is first published; kept if it reverts to draft.
    pub published_at: Option<Timestamp>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Query parameters for `GET /posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListParams {
    /// Exact-match status filter.
    pub status: Option<String>,
}
