//! Repository for the `categories` table.

use cms_core::category::NewCategory;
use cms_core::partial_update::UpdateSet;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::repositories::partial_update::apply_update;

const COLUMNS: &str = "category_id, name, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewCategory,
        created_by: Option<DbId>,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, created_by, updated_by)
             VALUES ($1, $2, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE category_id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY category_id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Apply a resolved partial update. Returns `None` if the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        set: UpdateSet,
    ) -> Result<Option<Category>, sqlx::Error> {
        apply_update(pool, "categories", "category_id", COLUMNS, id, set).await
    }

    /// Delete a category by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
