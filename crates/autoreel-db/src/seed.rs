use std::collections::HashMap;

use autoreel_core::logs::normalize_level;
use autoreel_core::{ReelStatus, SeedFile, SeedReel};
use chrono::{DateTime, TimeDelta, Utc};
use sqlx::PgPool;

use crate::DbError;

/// How many rows a seeding pass touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub profiles: usize,
    pub reels: usize,
    pub logs_inserted: usize,
}

/// Upsert profiles and reels and append logs from a validated seed file.
///
/// Relative ages in the seed are resolved against `now`. Profiles upsert on
/// username and reels on reel code, so re-running refreshes timestamps
/// instead of duplicating rows. A log is skipped when a row with the same
/// level and message already exists.
///
/// Everything runs in one transaction; any failure rolls the batch back.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if a reel references a profile missing from
/// the seed, [`DbError::InvalidSeed`] if a relative age cannot be resolved
/// against `now`, or [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_database(
    pool: &PgPool,
    seed: &SeedFile,
    now: DateTime<Utc>,
) -> Result<SeedSummary, DbError> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();
    let mut profile_ids: HashMap<String, i64> = HashMap::new();

    for profile in &seed.profiles {
        let last_checked_at = profile
            .last_checked_minutes_ago
            .map(|m| before(now, TimeDelta::try_minutes(m), &profile.username))
            .transpose()?;
        let last_posted_at = profile
            .last_posted_hours_ago
            .map(|h| hours_before(now, h, &profile.username))
            .transpose()?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO monitored_profiles \
                 (instagram_username, display_name, profile_picture_url, is_active, \
                  last_checked_at, last_posted_at, check_interval_minutes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (instagram_username) DO UPDATE SET \
                 display_name           = EXCLUDED.display_name, \
                 profile_picture_url    = EXCLUDED.profile_picture_url, \
                 is_active              = EXCLUDED.is_active, \
                 last_checked_at        = EXCLUDED.last_checked_at, \
                 last_posted_at         = EXCLUDED.last_posted_at, \
                 check_interval_minutes = EXCLUDED.check_interval_minutes, \
                 updated_at             = NOW() \
             RETURNING id",
        )
        .bind(&profile.username)
        .bind(&profile.display_name)
        .bind(&profile.profile_picture_url)
        .bind(profile.is_active)
        .bind(last_checked_at)
        .bind(last_posted_at)
        .bind(profile.check_interval_minutes)
        .fetch_one(&mut *tx)
        .await?;

        profile_ids.insert(profile.username.to_lowercase(), id);
        summary.profiles += 1;
    }

    for reel in &seed.reels {
        let profile_id = *profile_ids
            .get(&reel.profile.to_lowercase())
            .ok_or(DbError::NotFound)?;
        let created_at = hours_before(now, reel.created_hours_ago, &reel.code)?;
        let posted_at = if reel.status == ReelStatus::Posted {
            match reel.posted_hours_ago {
                Some(h) => Some(hours_before(now, h, &reel.code)?),
                None => Some(created_at),
            }
        } else {
            None
        };
        let (tiktok_post_id, tiktok_post_url) = tiktok_fields(reel);
        let video_file_path =
            (reel.status != ReelStatus::Pending).then(|| format!("/videos/{}.mp4", reel.code));

        sqlx::query(
            "INSERT INTO posted_reels \
                 (profile_id, instagram_reel_code, instagram_reel_url, tiktok_post_id, \
                  tiktok_post_url, status, video_file_path, caption, posted_at, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (instagram_reel_code) DO UPDATE SET \
                 profile_id         = EXCLUDED.profile_id, \
                 instagram_reel_url = EXCLUDED.instagram_reel_url, \
                 tiktok_post_id     = EXCLUDED.tiktok_post_id, \
                 tiktok_post_url    = EXCLUDED.tiktok_post_url, \
                 status             = EXCLUDED.status, \
                 video_file_path    = EXCLUDED.video_file_path, \
                 caption            = EXCLUDED.caption, \
                 posted_at          = EXCLUDED.posted_at, \
                 created_at         = EXCLUDED.created_at, \
                 updated_at         = NOW()",
        )
        .bind(profile_id)
        .bind(&reel.code)
        .bind(reel.url())
        .bind(tiktok_post_id)
        .bind(tiktok_post_url)
        .bind(reel.status.as_str())
        .bind(video_file_path)
        .bind(&reel.caption)
        .bind(posted_at)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        summary.reels += 1;
    }

    for log in &seed.logs {
        let level = normalize_level(&log.level).unwrap_or("INFO");
        let context = (!log.context.is_null()).then_some(&log.context);
        let created_at = hours_before(now, log.hours_ago, &log.message)?;

        let result = sqlx::query(
            "INSERT INTO application_logs (level, message, context, created_at) \
             SELECT $1, $2, $3, $4 \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM application_logs WHERE level = $1 AND message = $2 \
             )",
        )
        .bind(level)
        .bind(&log.message)
        .bind(context)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() > 0 {
            summary.logs_inserted += 1;
        }
    }

    tx.commit().await?;
    Ok(summary)
}

fn before(
    now: DateTime<Utc>,
    age: Option<TimeDelta>,
    owner: &str,
) -> Result<DateTime<Utc>, DbError> {
    age.and_then(|d| now.checked_sub_signed(d))
        .ok_or_else(|| DbError::InvalidSeed(format!("age of '{owner}' is out of range")))
}

fn hours_before(now: DateTime<Utc>, hours: i64, owner: &str) -> Result<DateTime<Utc>, DbError> {
    before(now, TimeDelta::try_hours(hours), owner)
}

fn tiktok_fields(reel: &SeedReel) -> (Option<String>, Option<String>) {
    if reel.status != ReelStatus::Posted {
        return (None, None);
    }
    let post_id = format!("tiktok_{}", reel.code);
    let url = format!("https://tiktok.com/@user/video/{post_id}");
    (Some(post_id), Some(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reel(status: ReelStatus) -> SeedReel {
        SeedReel {
            code: "reel_001".to_string(),
            profile: "@fitnessmodel".to_string(),
            caption: None,
            status,
            created_hours_ago: 0,
            posted_hours_ago: None,
        }
    }

    #[test]
    fn only_posted_reels_get_tiktok_fields() {
        let (id, url) = tiktok_fields(&reel(ReelStatus::Posted));
        assert_eq!(id.as_deref(), Some("tiktok_reel_001"));
        assert_eq!(
            url.as_deref(),
            Some("https://tiktok.com/@user/video/tiktok_reel_001")
        );

        assert_eq!(tiktok_fields(&reel(ReelStatus::Pending)), (None, None));
        assert_eq!(tiktok_fields(&reel(ReelStatus::Failed)), (None, None));
    }

    #[test]
    fn hours_before_rejects_overflowing_ages() {
        use chrono::TimeZone;

        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(
            hours_before(now, 2, "reel_001").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap()
        );

        let err = hours_before(now, i64::MAX, "reel_001").unwrap_err();
        assert!(matches!(err, DbError::InvalidSeed(ref m) if m.contains("reel_001")));

        let err = before(now, TimeDelta::try_minutes(9_000_000_000_000_000), "@a").unwrap_err();
        assert!(matches!(err, DbError::InvalidSeed(_)));
    }
}
