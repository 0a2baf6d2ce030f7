// SPDX-License-Identifier: MIT
// Task persistence over the `tasks` table.

use sqlx::SqlitePool;

use super::model::TaskRow;

/// Errors surfaced by [`TaskStore`] operations.
///
/// `NotFound` is its own variant so handlers can answer 404; everything else
/// is a storage failure reported to the user as a transient message.
#[derive(Debug, thiserror::Error)]
pub enum TaskStoreError {
    #[error("no task with id {id}")]
    NotFound { id: i64 },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD layer for task records. Cheap to clone — wraps an Arc-backed pool.
///
/// Every mutation is a single SQL statement, so SQLite commits or rolls it
/// back as one implicit transaction; a failed call leaves the table unchanged.
#[derive(Clone)]
pub struct TaskStore {
    pool: SqlitePool,
}

impl TaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new task with `completed = false` and return the stored row.
    ///
    /// The caller validates the description first; the store persists what it
    /// is given.
    pub async fn insert_task(&self, description: &str) -> Result<TaskRow, TaskStoreError> {
        let result = sqlx::query("INSERT INTO tasks (description, completed) VALUES (?, 0)")
            .bind(description)
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, description, completed FROM tasks WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Every task, ascending id order. No pagination, no filtering.
    pub async fn list_tasks(&self) -> Result<Vec<TaskRow>, TaskStoreError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, description, completed FROM tasks ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Look up one task. A missing id is `NotFound`, never a bare driver error.
    pub async fn get_task(&self, id: i64) -> Result<TaskRow, TaskStoreError> {
        sqlx::query_as::<_, TaskRow>("SELECT id, description, completed FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(TaskStoreError::NotFound { id })
    }

    /// Flip `completed` in one atomic statement.
    /// Zero rows affected is the miss signal — lookup and mutation cannot race.
    pub async fn toggle_completed(&self, id: i64) -> Result<(), TaskStoreError> {
        let result = sqlx::query("UPDATE tasks SET completed = NOT completed WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(TaskStoreError::NotFound { id });
        }
        Ok(())
    }

    /// Hard delete. Zero rows affected means the id does not exist.
    pub async fn delete_task(&self, id: i64) -> Result<(), TaskStoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(TaskStoreError::NotFound { id });
        }
        Ok(())
    }

    /// Row count, used by the health endpoint.
    pub async fn count_tasks(&self) -> Result<i64, TaskStoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
