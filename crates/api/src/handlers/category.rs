//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use cms_core::category::{CreateCategory, UpdateCategory};
use cms_core::error::CoreError;
use cms_core::types::DbId;
use cms_db::models::category::Category;
use cms_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::{CreatedByParams, UpdatedByParams};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CreatedByParams>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let new_category = input.validate()?;
    let category = CategoryRepo::create(&state.pool, &new_category, params.created_by).await?;

    tracing::info!(
        category_id = category.category_id,
        created_by = ?params.created_by,
        "Category created",
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// PATCH /categories/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<UpdatedByParams>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let set = input.resolve(params.updated_by, Utc::now())?;

    let category = CategoryRepo::update(&state.pool, id, set)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, updated_by = ?params.updated_by, "Category updated");

    Ok(Json(category))
}

/// DELETE /categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
