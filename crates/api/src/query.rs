//! Shared query parameter types for API handlers.
//!
//! The acting user of a mutating request is passed in the query string.
//! It is optional everywhere; see each handler for the fallback.

use cms_core::types::DbId;
use serde::Deserialize;

/// `?created_by=` on create endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CreatedByParams {
    pub created_by: Option<DbId>,
}

/// `?updated_by=` on update endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatedByParams {
    pub updated_by: Option<DbId>,
}
