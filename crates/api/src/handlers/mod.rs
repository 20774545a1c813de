//! Request handlers for the CMS resources.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single resource. Handlers validate the payload with
//! `cms_core`, delegate to the corresponding repository in `cms_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod category;
pub mod comment;
pub mod post;
pub mod user;
