use crate::error::AppError;
use crate::models::Task;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, title, status, completion_date, user_id, created_at, updated_at";

/// Persistence for tasks. Ownership scoping lives here: `find_owned` is the
/// gate handlers must pass before calling `update` or `delete`.
#[derive(Clone)]
pub struct TaskStore {
    pool: PgPool,
}

impl TaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i32,
        title: &str,
        status: &str,
        completion_date: NaiveDate,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (id, title, status, completion_date, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(status)
        .bind(completion_date)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// All tasks owned by `user_id`, in store order (no sort guarantee).
    pub async fn list_by_owner(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    /// Lookup scoped by both id and owner. Returns `None` whether the task
    /// is absent or belongs to someone else; callers cannot tell which.
    pub async fn find_owned(&self, task_id: Uuid, user_id: i32) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1 AND user_id = $2"
        ))
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    /// Overwrites the mutable fields of a task. Callers check ownership via
    /// `find_owned` first; if the task vanished in between (a concurrent
    /// delete), this reports `NotFound` rather than a database error.
    pub async fn update(
        &self,
        task_id: Uuid,
        title: &str,
        status: &str,
        completion_date: NaiveDate,
    ) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks
             SET title = $1, status = $2, completion_date = $3, updated_at = now()
             WHERE id = $4
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(title)
        .bind(status)
        .bind(completion_date)
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    /// Removes a task by id. Callers check ownership via `find_owned` first.
    pub async fn delete(&self, task_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
