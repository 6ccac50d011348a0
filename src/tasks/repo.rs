use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Task row. Every query below is scoped by `author_id`; that predicate is
/// the sole authorization check, so a foreign task is indistinguishable from
/// a missing one.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub author_id: Uuid,
    pub value: String,
    pub is_resolved: bool,
    pub created_at: OffsetDateTime,
}

impl Task {
    pub async fn list_by_author(db: &PgPool, author_id: Uuid) -> sqlx::Result<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, author_id, value, is_resolved, created_at
            FROM tasks
            WHERE author_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(author_id)
        .fetch_all(db)
        .await
    }

    pub async fn get(db: &PgPool, author_id: Uuid, task_id: Uuid) -> sqlx::Result<Option<Task>> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, author_id, value, is_resolved, created_at
            FROM tasks
            WHERE id = $1 AND author_id = $2
            "#,
        )
        .bind(task_id)
        .bind(author_id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &PgPool, author_id: Uuid, value: &str) -> sqlx::Result<Task> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (author_id, value)
            VALUES ($1, $2)
            RETURNING id, author_id, value, is_resolved, created_at
            "#,
        )
        .bind(author_id)
        .bind(value)
        .fetch_one(db)
        .await
    }

    /// Returns false when no row matched (absent or owned by someone else),
    /// so callers can surface NotFound instead of a silent no-op.
    pub async fn set_resolved(
        db: &PgPool,
        author_id: Uuid,
        task_id: Uuid,
        resolved: bool,
    ) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET is_resolved = $3
            WHERE id = $1 AND author_id = $2
            "#,
        )
        .bind(task_id)
        .bind(author_id)
        .bind(resolved)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(db: &PgPool, author_id: Uuid, task_id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE id = $1 AND author_id = $2
            "#,
        )
        .bind(task_id)
        .bind(author_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
