use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::TodoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: todolist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Application-logic layer for the todo resource.
    pub todos: TodoService,
}
