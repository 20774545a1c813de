use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is built once at startup and injected here; handlers never reach
/// for global connection settings.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cms_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
