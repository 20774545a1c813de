//! Domain logic for the CMS API.
//!
//! Pure functions and payload types with no I/O: validation of incoming
//! payloads, the partial-update resolver, and per-resource rules for users,
//! categories, posts and comments. Both the DB and API layers depend on it.

pub mod category;
pub mod comment;
pub mod error;
pub mod partial_update;
pub mod post;
pub mod roles;
pub mod types;
pub mod user;
pub mod validation;
