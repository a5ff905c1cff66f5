//! Handlers for the todo CRUD endpoints.
//!
//! Thin wrappers over [`TodoService`]: extract, delegate, serialize.
//! Responses carry the bare entity (or array), no envelope.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use todolist_core::types::DbId;
use todolist_db::models::todo::TodoInput;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/todos
///
/// List all todos.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = state.todos.get_all_todos().await?;
    Ok(Json(todos))
}

/// GET /api/todos/{id}
///
/// Fetch a single todo. 404 when the id does not exist.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.get_todo_by_id(id).await?;
    Ok(Json(todo))
}

/// POST /api/todos
///
/// Create a todo from the request body. Any client-supplied id is
/// ignored; the response carries the assigned one.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.create_todo(&input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/todos/{id}
///
/// Fully replace a todo's title, description, and done flag. 404 when
/// the id does not exist.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TodoInput>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.update_todo(id, &input).await?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
///
/// Delete a todo. Idempotent: deleting an absent id still returns 204.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.todos.delete_todo_by_id(id).await?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
