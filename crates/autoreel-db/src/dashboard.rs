//! Aggregate counters behind `/dashboard/stats`.

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;

use crate::DbError;

/// Raw counts for the dashboard; rates and growth are derived by the caller.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DashboardCountsRow {
    pub total_videos: i64,
    pub posted: i64,
    pub posts_today: i64,
    pub posts_yesterday: i64,
    pub last_30_days: i64,
    pub previous_30_days: i64,
    pub active_profiles: i64,
}

/// Counts reels and active profiles relative to `now`.
///
/// "Today" and "yesterday" are UTC calendar days; the 30-day windows are
/// rolling, ending at `now`. All windows are keyed on `created_at`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn dashboard_counts(
    pool: &PgPool,
    now: DateTime<Utc>,
) -> Result<DashboardCountsRow, DbError> {
    let today_start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map_or(now, |midnight| midnight.and_utc());
    let yesterday_start = today_start - Duration::days(1);
    let thirty_days_ago = now - Duration::days(30);
    let sixty_days_ago = now - Duration::days(60);

    let row = sqlx::query_as::<_, DashboardCountsRow>(
        "SELECT \
             COUNT(*) AS total_videos, \
             COUNT(*) FILTER (WHERE status = 'posted') AS posted, \
             COUNT(*) FILTER (WHERE created_at >= $1) AS posts_today, \
             COUNT(*) FILTER (WHERE created_at >= $2 AND created_at < $1) AS posts_yesterday, \
             COUNT(*) FILTER (WHERE created_at >= $3) AS last_30_days, \
             COUNT(*) FILTER (WHERE created_at >= $4 AND created_at < $3) AS previous_30_days, \
             (SELECT COUNT(*) FROM monitored_profiles WHERE is_active) AS active_profiles \
         FROM posted_reels",
    )
    .bind(today_start)
    .bind(yesterday_start)
    .bind(thirty_days_ago)
    .bind(sixty_days_ago)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
