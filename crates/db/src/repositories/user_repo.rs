//! Repository for the `users` table.

use cms_core::partial_update::UpdateSet;
use cms_core::types::DbId;
use cms_core::user::NewUser;
use sqlx::PgPool;

use crate::models::user::User;
use crate::repositories::partial_update::apply_update;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, username, email, password_hash, role, \
                       created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Without a `created_by`, the new row becomes its own creator and
    /// updater. The insert and that follow-up update share one transaction,
    /// so a user is never left with null audit columns.
    pub async fn create(
        pool: &PgPool,
        input: &NewUser,
        password_hash: &str,
        created_by: Option<DbId>,
    ) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO users (username, email, password_hash, role, created_by, updated_by)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&insert)
            .bind(&input.username)
            .bind(&input.email)
            .bind(password_hash)
            .bind(&input.role)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;

        let user = match created_by {
            Some(_) => user,
            None => {
                let bootstrap = format!(
                    "UPDATE users SET created_by = user_id, updated_by = user_id
                     WHERE user_id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, User>(&bootstrap)
                    .bind(user.user_id)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(user)
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY user_id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Apply a resolved partial update.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        set: UpdateSet,
    ) -> Result<Option<User>, sqlx::Error> {
        apply_update(pool, "users", "user_id", COLUMNS, id, set).await
    }

    /// Delete a user by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
