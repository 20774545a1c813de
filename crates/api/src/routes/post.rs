//! Route definitions for the `/posts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::post;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /        -> list (?status=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(post::list).post(post::create))
        .route(
            "/{id}",
            get(post::get_by_id)
                .patch(post::update)
                .delete(post::delete),
        )
}
