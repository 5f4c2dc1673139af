//! Read queries for `monitored_profiles`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

/// A monitored profile joined with the number of reels recorded for it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRow {
    pub id: i64,
    pub instagram_username: String,
    pub display_name: Option<String>,
    pub profile_picture_url: Option<String>,
    pub is_active: bool,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub last_posted_at: Option<DateTime<Utc>>,
    pub check_interval_minutes: i32,
    pub posts_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProfileCountsRow {
    pub total_profiles: i64,
    pub active_profiles: i64,
    pub total_posts: i64,
}

/// All profiles, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_profiles(pool: &PgPool) -> Result<Vec<ProfileRow>, DbError> {
    let rows = sqlx::query_as::<_, ProfileRow>(
        "SELECT p.id, p.instagram_username, p.display_name, p.profile_picture_url, \
                p.is_active, p.last_checked_at, p.last_posted_at, \
                p.check_interval_minutes, COUNT(r.id) AS posts_count, p.created_at \
         FROM monitored_profiles p \
         LEFT JOIN posted_reels r ON r.profile_id = p.id \
         GROUP BY p.id \
         ORDER BY p.created_at DESC, p.id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Profile totals; `total_posts` counts every recorded reel.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn profile_counts(pool: &PgPool) -> Result<ProfileCountsRow, DbError> {
    let row = sqlx::query_as::<_, ProfileCountsRow>(
        "SELECT \
             COUNT(*) AS total_profiles, \
             COUNT(*) FILTER (WHERE is_active) AS active_profiles, \
             (SELECT COUNT(*) FROM posted_reels) AS total_posts \
         FROM monitored_profiles",
    )
    .fetch_one(pool)
    .await?;

    Ok(row)
}
