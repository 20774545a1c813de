pub mod category;
pub mod comment;
pub mod health;
pub mod post;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy (a trailing slash on any path is accepted):
///
/// ```text
/// /users                     list, create
/// /users/{id}                get, update (PATCH), delete
///
/// /categories                list, create
/// /categories/{id}           get, update (PATCH), delete
///
/// /posts                     list (?status=), create
/// /posts/{id}                get, update (PATCH), delete
///
/// /comments                  list (?post_id=), create
/// /comments/{id}             get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/categories", category::router())
        .nest("/posts", post::router())
        .nest("/comments", comment::router())
}
