//! Row structs and list-filter params.
//!
//! Each submodule contains a `FromRow` struct matching the table's columns.
//! Create/update payloads and their validation live in `cms_core`.

pub mod category;
pub mod comment;
pub mod post;
pub mod user;
