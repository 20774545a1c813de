//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use cms_core::error::CoreError;
use cms_core::types::DbId;
use cms_core::user::{CreateUser, UpdateUser};
use cms_db::models::user::UserResponse;
use cms_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::password::hash_password;
use crate::query::{CreatedByParams, UpdatedByParams};
use crate::state::AppState;

/// POST /users
///
/// Without `?created_by=` the new user is recorded as its own creator.
pub async fn create(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CreatedByParams>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let new_user = input.validate()?;

    let password_hash = hash_password(&new_user.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(&state.pool, &new_user, &password_hash, params.created_by).await?;

    tracing::info!(
        user_id = user.user_id,
        created_by = ?params.created_by,
        "User created",
    );

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user.into()))
}

/// PATCH /users/{id}
///
/// Without `?updated_by=` the user is recorded as its own updater.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<UpdatedByParams>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let set = input.resolve(id, params.updated_by, Utc::now())?;

    let user = UserRepo::update(&state.pool, id, set)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = id, updated_by = ?user.updated_by, "User updated");

    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !UserRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
