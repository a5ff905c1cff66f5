//! Repository for the `todos` table.

use todolist_core::types::DbId;

use crate::models::todo::{Todo, TodoInput};
use crate::DbPool;

/// Column list for todos queries.
const TODO_COLUMNS: &str = "id, title, description, done";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos. No ordering guarantee.
    pub async fn find_all(pool: &DbPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Find a todo by its ID. Returns `None` when no row matches.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully overwrite a todo, returning the persisted row.
    ///
    /// With `id = None` a new row is inserted and the database assigns
    /// the id. With `id = Some(..)` the existing row is overwritten
    /// wholesale; callers must supply full state, there are no partial
    /// updates. The id itself never changes.
    pub async fn save(
        pool: &DbPool,
        id: Option<DbId>,
        input: &TodoInput,
    ) -> Result<Todo, sqlx::Error> {
        let query = match id {
            None => format!(
                "INSERT INTO todos (title, description, done)
                 VALUES ($1, $2, $3)
                 RETURNING {TODO_COLUMNS}"
            ),
            Some(_) => format!(
                "UPDATE todos SET title = $1, description = $2, done = $3
                 WHERE id = $4
                 RETURNING {TODO_COLUMNS}"
            ),
        };

        let mut q = sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.done);
        if let Some(id) = id {
            q = q.bind(id);
        }
        q.fetch_one(pool).await
    }

    /// Delete a todo by its ID. No error when the row is absent.
    pub async fn delete_by_id(pool: &DbPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
