//! Read queries for `posted_reels`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

/// A reel joined with its owning profile.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReelRow {
    pub id: i64,
    pub instagram_reel_code: String,
    pub instagram_reel_url: Option<String>,
    pub caption: Option<String>,
    pub status: String,
    pub video_file_path: Option<String>,
    pub tiktok_post_id: Option<String>,
    pub tiktok_post_url: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub profile_username: String,
    pub profile_display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ReelCountsRow {
    pub total: i64,
    pub pending: i64,
    pub posted: i64,
    pub failed: i64,
}

/// The pieces of a posted reel needed to rank it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostedReelRow {
    pub instagram_reel_code: String,
    pub caption: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

/// Reels newest first, optionally restricted to one status.
///
/// `status` is compared verbatim against the stored value, so callers pass
/// the lowercase wire form.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_reels(pool: &PgPool, status: Option<&str>) -> Result<Vec<ReelRow>, DbError> {
    let rows = sqlx::query_as::<_, ReelRow>(
        "SELECT r.id, r.instagram_reel_code, r.instagram_reel_url, r.caption, r.status, \
                r.video_file_path, r.tiktok_post_id, r.tiktok_post_url, r.posted_at, \
                r.created_at, p.instagram_username AS profile_username, \
                p.display_name AS profile_display_name \
         FROM posted_reels r \
         JOIN monitored_profiles p ON p.id = r.profile_id \
         WHERE ($1::TEXT IS NULL OR r.status = $1) \
         ORDER BY r.created_at DESC, r.id DESC",
    )
    .bind(status)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Reel totals broken down by status.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn reel_counts(pool: &PgPool) -> Result<ReelCountsRow, DbError> {
    let row = sqlx::query_as::<_, ReelCountsRow>(
        "SELECT \
             COUNT(*) AS total, \
             COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
             COUNT(*) FILTER (WHERE status = 'posted') AS posted, \
             COUNT(*) FILTER (WHERE status = 'failed') AS failed \
         FROM posted_reels",
    )
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Posted reels, newest by creation time first, at most `limit`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_recent_posted_reels(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<PostedReelRow>, DbError> {
    let rows = sqlx::query_as::<_, PostedReelRow>(
        "SELECT instagram_reel_code, caption, posted_at \
         FROM posted_reels \
         WHERE status = 'posted' \
         ORDER BY created_at DESC, id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
