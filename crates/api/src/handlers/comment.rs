//! Handlers for the `/comments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use cms_core::comment::{CreateComment, UpdateComment};
use cms_core::error::CoreError;
use cms_core::types::DbId;
use cms_db::models::comment::{Comment, CommentListParams};
use cms_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::{CreatedByParams, UpdatedByParams};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Comment",
        id,
    })
}

/// POST /comments
pub async fn create(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CreatedByParams>,
    AppJson(input): AppJson<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let new_comment = input.validate()?;
    let comment = CommentRepo::create(&state.pool, &new_comment, params.created_by).await?;

    tracing::info!(
        comment_id = comment.comment_id,
        post_id = comment.post_id,
        created_by = ?params.created_by,
        "Comment created",
    );

    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /comments
///
/// Optional `?post_id=` restricts the list to one post's comments.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CommentListParams>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = CommentRepo::list(&state.pool, params.post_id).await?;
    Ok(Json(comments))
}

/// GET /comments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Comment>> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(comment))
}

/// PATCH /comments/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<UpdatedByParams>,
    AppJson(input): AppJson<UpdateComment>,
) -> AppResult<Json<Comment>> {
    let set = input.resolve(params.updated_by, Utc::now())?;

    let comment = CommentRepo::update(&state.pool, id, set)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(comment_id = id, updated_by = ?params.updated_by, "Comment updated");

    Ok(Json(comment))
}

/// DELETE /comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !CommentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
