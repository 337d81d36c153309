//! Repository for the `tasks` table.

use sqlx::PgPool;
use tasknest_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category_id, priority, deadline, \
                       duration_minutes, status, user_id, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List tasks, newest `created_at` first (id as tiebreak). When
    /// `user_id` is given, only that owner's tasks are returned. Unbounded
    /// result set -- the surface has no pagination.
    pub async fn list(pool: &PgPool, user_id: Option<DbId>) -> Result<Vec<Task>, sqlx::Error> {
        match user_id {
            Some(user_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks
                     WHERE user_id = $1
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC");
                sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new task, returning the created row. Missing optional
    /// fields fall back to the model defaults in SQL.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTask,
        user_id: DbId,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (title, description, category_id, priority, deadline,
                 duration_minutes, status, user_id)
             VALUES
                (COALESCE($1, ''), COALESCE($2, ''), $3, COALESCE($4, 'Medium'),
                 $5, $6, COALESCE($7, 'Pending'), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(&input.priority)
            .bind(input.deadline)
            .bind(input.duration_minutes)
            .bind(&input.status)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Update a task. Omitted fields keep their stored values; the nullable
    /// columns take a presence flag alongside the value so an explicit
    /// `null` clears them (COALESCE cannot express that). `updated_at` is
    /// refreshed on every write.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category_id = CASE WHEN $4 THEN $5 ELSE category_id END,
                priority = COALESCE($6, priority),
                deadline = CASE WHEN $7 THEN $8 ELSE deadline END,
                duration_minutes = CASE WHEN $9 THEN $10 ELSE duration_minutes END,
                status = COALESCE($11, status),
                user_id = COALESCE($12, user_id),
                updated_at = clock_timestamp()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id.is_some())
            .bind(input.category_id.flatten())
            .bind(&input.priority)
            .bind(input.deadline.is_some())
            .bind(input.deadline.flatten())
            .bind(input.duration_minutes.is_some())
            .bind(input.duration_minutes.flatten())
            .bind(&input.status)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
