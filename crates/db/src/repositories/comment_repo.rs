//! Repository for the `comments` table.

use cms_core::comment::NewComment;
use cms_core::partial_update::UpdateSet;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::Comment;
use crate::repositories::partial_update::apply_update;

const COLUMNS: &str = "comment_id, post_id, user_id, category_id, body, \
                       created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewComment,
        created_by: Option<DbId>,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (post_id, user_id, category_id, body, created_by, updated_by)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.post_id)
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(&input.body)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE comment_id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List comments ordered by ID, optionally restricted to one post.
    pub async fn list(pool: &PgPool, post_id: Option<DbId>) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE ($1::BIGINT IS NULL OR post_id = $1)
             ORDER BY comment_id"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a resolved partial update. Returns `None` if the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        set: UpdateSet,
    ) -> Result<Option<Comment>, sqlx::Error> {
        apply_update(pool, "comments", "comment_id", COLUMNS, id, set).await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
