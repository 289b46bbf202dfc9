//! PostgreSQL implementation of the todo repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewTodo, TodoItem, UpdateTodo};
use crate::domain::errors::StoreError;
use crate::domain::repositories::TodoRepository;

/// PostgreSQL repository for todos.
///
/// Each operation checks out its own connection from the pool and returns it
/// when the operation finishes, on success and on error alike. Update and
/// delete lock the target row inside a transaction so the existence check
/// and the write are atomic.
pub struct PgTodoRepository {
    pool: Arc<PgPool>,
}

impl PgTodoRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TodoRow {
    id: i32,
    todo: String,
    completed: bool,
}

impl From<TodoRow> for TodoItem {
    fn from(row: TodoRow) -> Self {
        TodoItem::new(row.id, row.todo, row.completed)
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn list(&self, completed: Option<bool>) -> Result<Vec<TodoItem>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, todo, completed
            FROM todos
            WHERE ($1::BOOLEAN IS NULL OR completed = $1)
            ORDER BY id
            "#,
        )
        .bind(completed)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(TodoItem::from).collect())
    }

    async fn create(&self, new_todo: NewTodo) -> Result<u64, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("INSERT INTO todos (todo, completed) VALUES ($1, FALSE)")
            .bind(new_todo.text)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<TodoItem>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, todo, completed FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(TodoItem::from))
    }

    async fn update(&self, id: i32, update: UpdateTodo) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> =
            sqlx::query_scalar("SELECT id FROM todos WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            tx.rollback().await?;
            return Ok(0);
        }

        let result = sqlx::query("UPDATE todos SET todo = $2, completed = $3 WHERE id = $1")
            .bind(id)
            .bind(update.text)
            .bind(update.completed)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i32> =
            sqlx::query_scalar("SELECT id FROM todos WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            tx.rollback().await?;
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query("SELECT 1").execute(&mut *conn).await?;

        Ok(())
    }
}
