//! Todo model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todolist_core::types::DbId;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
}

/// DTO for creating or fully replacing a todo.
///
/// Used by both POST and PUT: updates are full replacement, so `done`
/// falls back to `false` when the request omits it. Any `id` in the
/// request body is ignored (the path or the database decides the id).
#[derive(Debug, Clone, Deserialize)]
pub struct TodoInput {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
}
