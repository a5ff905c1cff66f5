//! Application logic for todos.
//!
//! [`TodoService`] sits between the HTTP handlers and the repository.
//! It owns the existence checks (mapping a missing row to
//! [`CoreError::NotFound`]) and field validation; everything else is a
//! pass-through to [`TodoRepo`]. Constructed explicitly in `main` and
//! handed to the router via [`crate::state::AppState`].

use todolist_core::error::CoreError;
use todolist_core::todo::validate_title;
use todolist_core::types::DbId;
use todolist_db::models::todo::{Todo, TodoInput};
use todolist_db::repositories::TodoRepo;
use todolist_db::DbPool;

use crate::error::{AppError, AppResult};

/// Application-logic layer for the todo resource.
#[derive(Clone)]
pub struct TodoService {
    pool: DbPool,
}

impl TodoService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List all todos.
    pub async fn get_all_todos(&self) -> AppResult<Vec<Todo>> {
        Ok(TodoRepo::find_all(&self.pool).await?)
    }

    /// Fetch a todo by id, failing with `NotFound` when no row matches.
    pub async fn get_todo_by_id(&self, id: DbId) -> AppResult<Todo> {
        TodoRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Todo", id }))
    }

    /// Create a new todo. Any id in the input was already discarded at
    /// deserialization; the database assigns one.
    pub async fn create_todo(&self, input: &TodoInput) -> AppResult<Todo> {
        validate_title(&input.title).map_err(AppError::Core)?;
        Ok(TodoRepo::save(&self.pool, None, input).await?)
    }

    /// Fully replace an existing todo's title, description, and done
    /// flag. Propagates `NotFound` when the id does not exist.
    pub async fn update_todo(&self, id: DbId, input: &TodoInput) -> AppResult<Todo> {
        let existing = self.get_todo_by_id(id).await?;
        validate_title(&input.title).map_err(AppError::Core)?;
        Ok(TodoRepo::save(&self.pool, Some(existing.id), input).await?)
    }

    /// Delete a todo by id. No existence check; deleting an absent id
    /// succeeds.
    pub async fn delete_todo_by_id(&self, id: DbId) -> AppResult<()> {
        Ok(TodoRepo::delete_by_id(&self.pool, id).await?)
    }
}
