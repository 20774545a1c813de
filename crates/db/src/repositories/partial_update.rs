//! Renders and executes an [`UpdateSet`] as one `UPDATE ... RETURNING`.
//!
//! Column names come from the set (static literals chosen by the resolvers);
//! every value is bound as a positional parameter.

use cms_core::partial_update::{ColumnValue, UpdateSet};
use cms_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// Build the statement text for `columns`, keyed on `key_column`.
///
/// Placeholders `$1..$n` follow the column order; the key is bound last.
pub fn render_update_sql<'a>(
    table: &str,
    key_column: &str,
    returning: &str,
    columns: impl Iterator<Item = &'a str>,
) -> String {
    let mut param_idx = 1u32;
    let assignments: Vec<String> = columns
        .map(|column| {
            let clause = format!("{column} = ${param_idx}");
            param_idx += 1;
            clause
        })
        .collect();

    format!(
        "UPDATE {table} SET {} WHERE {key_column} = ${param_idx} RETURNING {returning}",
        assignments.join(", ")
    )
}

/// Apply `set` to the row identified by `id`.
///
/// Returns `None` when no row has that key. The set must be non-empty; the
/// resolvers guarantee this through [`UpdateSet::finish`].
pub async fn apply_update<T>(
    pool: &PgPool,
    table: &str,
    key_column: &str,
    returning: &str,
    id: DbId,
    set: UpdateSet,
) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    debug_assert!(!set.is_empty(), "update set must not be empty");

    let sql = render_update_sql(table, key_column, returning, set.columns());
    tracing::debug!(table, id, columns = set.len(), "Applying partial update");

    let mut query = sqlx::query_as::<_, T>(&sql);
    for assignment in set.into_assignments() {
        query = match assignment.value {
            ColumnValue::Text(value) => query.bind(value),
            ColumnValue::OptionalText(value) => query.bind(value),
            ColumnValue::Id(value) => query.bind(value),
            ColumnValue::OptionalId(value) => query.bind(value),
            ColumnValue::Timestamp(value) => query.bind(value),
        };
    }
    query.bind(id).fetch_optional(pool).await
}
