//! Repository for the `posts` table.

use cms_core::partial_update::UpdateSet;
use cms_core::post::NewPost;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::Post;
use crate::repositories::partial_update::apply_update;

const COLUMNS: &str = "post_id, user_id, category_id, title, body, status, media_url, \
                       published_at, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewPost,
        created_by: Option<DbId>,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (user_id, category_id, title, body, status, media_url,
                                published_at, created_by, updated_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.status)
            .bind(&input.media_url)
            .bind(input.published_at)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE post_id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List posts ordered by ID, optionally restricted to one status.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY post_id"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Apply a resolved partial update. Returns `None` if the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        set: UpdateSet,
    ) -> Result<Option<Post>, sqlx::Error> {
        apply_update(pool, "posts", "post_id", COLUMNS, id, set).await
    }

    /// Delete a post by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
