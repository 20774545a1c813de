//! Handlers for the `/posts` resource.
//!
//! Publishing (status `published`) stamps `published_at` on create and on
//! update; see [`cms_core::post`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use cms_core::error::CoreError;
use cms_core::post::{CreatePost, UpdatePost};
use cms_core::types::DbId;
use cms_db::models::post::{Post, PostListParams};
use cms_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::{CreatedByParams, UpdatedByParams};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Post", id })
}

/// POST /posts
pub async fn create(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CreatedByParams>,
    AppJson(input): AppJson<CreatePost>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let new_post = input.validate(Utc::now())?;
    let post = PostRepo::create(&state.pool, &new_post, params.created_by).await?;

    tracing::info!(
        post_id = post.post_id,
        status = %post.status,
        created_by = ?params.created_by,
        "Post created",
    );

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts
///
/// Optional `?status=` restricts the list to an exact status. An empty
/// `?status=` is the same as no filter.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PostListParams>,
) -> AppResult<Json<Vec<Post>>> {
    let status = params.status.as_deref().filter(|s| !s.is_empty());
    let posts = PostRepo::list(&state.pool, status).await?;
    Ok(Json(posts))
}

/// GET /posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Post>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(post))
}

/// PATCH /posts/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<UpdatedByParams>,
    AppJson(input): AppJson<UpdatePost>,
) -> AppResult<Json<Post>> {
    let set = input.resolve(params.updated_by, Utc::now())?;

    let post = PostRepo::update(&state.pool, id, set)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        post_id = id,
        status = %post.status,
        updated_by = ?params.updated_by,
        "Post updated",
    );

    Ok(Json(post))
}

/// DELETE /posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !PostRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(post_id = id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
