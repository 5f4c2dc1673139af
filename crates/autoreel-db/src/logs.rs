//! The `application_logs` feed: listing, appending and retention.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LogRow {
    pub id: i64,
    pub level: String,
    pub message: String,
    pub context: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Newest log rows first, optionally restricted to one stored level.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_logs(
    pool: &PgPool,
    level: Option<&str>,
    limit: i64,
) -> Result<Vec<LogRow>, DbError> {
    let rows = sqlx::query_as::<_, LogRow>(
        "SELECT id, level, message, context, created_at \
         FROM application_logs \
         WHERE ($1::TEXT IS NULL OR level = $1) \
         ORDER BY created_at DESC, id DESC \
         LIMIT $2",
    )
    .bind(level)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Appends a log row and returns its `id`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_log(
    pool: &PgPool,
    level: &str,
    message: &str,
    context: Option<&serde_json::Value>,
    created_at: DateTime<Utc>,
) -> Result<i64, DbError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO application_logs (level, message, context, created_at) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id",
    )
    .bind(level)
    .bind(message)
    .bind(context)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Deletes log rows created strictly before `cutoff`.
///
/// Returns the number of rows removed.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the delete fails.
pub async fn delete_logs_older_than(pool: &PgPool, cutoff: DateTime<Utc>) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM application_logs WHERE created_at < $1")
        .bind(cutoff)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
