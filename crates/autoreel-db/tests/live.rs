//! Live integration tests for autoreel-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/autoreel-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use autoreel_core::seed::parse_seed;
use autoreel_db::{
    dashboard_counts, delete_logs_older_than, insert_log, list_logs, list_profiles,
    list_recent_posted_reels, list_reels, profile_counts, reel_counts, seed_database,
};
use chrono::{Duration, TimeZone, Utc};

const SEED: &str = r#"
profiles:
  - username: "@fitnessmodel"
    display_name: Fitness Model
    check_interval_minutes: 30
    last_checked_minutes_ago: 5
  - username: "@foodlover"
    display_name: Food Lover
    is_active: false
reels:
  - { code: reel_001, profile: "@fitnessmodel", caption: Workout Routine 2024, status: posted, created_hours_ago: 2, posted_hours_ago: 1 }
  - { code: reel_002, profile: "@fitnessmodel", caption: Morning Motivation, status: pending, created_hours_ago: 30 }
  - { code: reel_003, profile: "@foodlover", caption: Healthy Recipes, status: failed, created_hours_ago: 800 }
logs:
  - { level: INFO, message: Reel posted successfully to TikTok, hours_ago: 1 }
  - { level: warn, message: TikTok API rate limit reached, hours_ago: 3 }
  - { level: ERROR, message: "Failed to download video: network timeout", hours_ago: 1000 }
"#;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

async fn seed(pool: &sqlx::PgPool) {
    let file = parse_seed(SEED).expect("seed parses");
    seed_database(pool, &file, now())
        .await
        .expect("seed_database failed");
}

#[sqlx::test(migrations = "../../migrations")]
async fn seed_is_idempotent(pool: sqlx::PgPool) {
    let file = parse_seed(SEED).unwrap();
    let first = seed_database(&pool, &file, now()).await.unwrap();
    assert_eq!(first.profiles, 2);
    assert_eq!(first.reels, 3);
    assert_eq!(first.logs_inserted, 3);

    let second = seed_database(&pool, &file, now()).await.unwrap();
    assert_eq!(second.logs_inserted, 0);

    let counts = reel_counts(&pool).await.unwrap();
    assert_eq!(counts.total, 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn profiles_carry_post_counts(pool: sqlx::PgPool) {
    seed(&pool).await;

    let profiles = list_profiles(&pool).await.unwrap();
    assert_eq!(profiles.len(), 2);
    let fitness = profiles
        .iter()
        .find(|p| p.instagram_username == "@fitnessmodel")
        .unwrap();
    assert_eq!(fitness.posts_count, 2);
    assert_eq!(fitness.check_interval_minutes, 30);
    assert_eq!(fitness.last_checked_at, Some(now() - Duration::minutes(5)));

    let counts = profile_counts(&pool).await.unwrap();
    assert_eq!(counts.total_profiles, 2);
    assert_eq!(counts.active_profiles, 1);
    assert_eq!(counts.total_posts, 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn reels_filter_by_status_newest_first(pool: sqlx::PgPool) {
    seed(&pool).await;

    let all = list_reels(&pool, None).await.unwrap();
    let codes: Vec<&str> = all.iter().map(|r| r.instagram_reel_code.as_str()).collect();
    assert_eq!(codes, vec!["reel_001", "reel_002", "reel_003"]);
    assert_eq!(all[0].profile_username, "@fitnessmodel");
    assert_eq!(all[0].tiktok_post_id.as_deref(), Some("tiktok_reel_001"));

    let pending = list_reels(&pool, Some("pending")).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].status, "pending");
    assert!(pending[0].video_file_path.is_none());

    let counts = reel_counts(&pool).await.unwrap();
    assert_eq!((counts.pending, counts.posted, counts.failed), (1, 1, 1));

    let posted = list_recent_posted_reels(&pool, 10).await.unwrap();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].posted_at, Some(now() - Duration::hours(1)));
}

#[sqlx::test(migrations = "../../migrations")]
async fn dashboard_counts_use_calendar_days(pool: sqlx::PgPool) {
    seed(&pool).await;

    let counts = dashboard_counts(&pool, now()).await.unwrap();
    assert_eq!(counts.total_videos, 3);
    assert_eq!(counts.posted, 1);
    // reel_001 was created at 10:00 today, reel_002 at 06:00 yesterday
    assert_eq!(counts.posts_today, 1);
    assert_eq!(counts.posts_yesterday, 1);
    assert_eq!(counts.last_30_days, 2);
    assert_eq!(counts.previous_30_days, 1);
    assert_eq!(counts.active_profiles, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn logs_list_filter_and_retention(pool: sqlx::PgPool) {
    seed(&pool).await;

    let logs = list_logs(&pool, None, 10).await.unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0].message, "Reel posted successfully to TikTok");

    let warnings = list_logs(&pool, Some("WARNING"), 10).await.unwrap();
    assert_eq!(warnings.len(), 1);

    let limited = list_logs(&pool, None, 2).await.unwrap();
    assert_eq!(limited.len(), 2);

    let context = serde_json::json!({ "task_id": "task_999" });
    let id = insert_log(&pool, "INFO", "Profile monitoring completed", Some(&context), now())
        .await
        .unwrap();
    assert!(id > 0);

    let removed = delete_logs_older_than(&pool, now() - Duration::days(30))
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(list_logs(&pool, None, 100).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn recent_posted_reels_follow_creation_order(pool: sqlx::PgPool) {
    // reel_new was created last but published before reel_old
    let file = parse_seed(
        r#"
profiles:
  - username: "@traveler"
reels:
  - { code: reel_old, profile: "@traveler", status: posted, created_hours_ago: 48, posted_hours_ago: 1 }
  - { code: reel_new, profile: "@traveler", status: posted, created_hours_ago: 6, posted_hours_ago: 5 }
  - { code: reel_wait, profile: "@traveler", status: pending, created_hours_ago: 1 }
"#,
    )
    .expect("seed parses");
    seed_database(&pool, &file, now()).await.unwrap();

    let posted = list_recent_posted_reels(&pool, 10).await.unwrap();
    let codes: Vec<&str> = posted.iter().map(|r| r.instagram_reel_code.as_str()).collect();
    assert_eq!(codes, vec!["reel_new", "reel_old"]);

    let newest = list_recent_posted_reels(&pool, 1).await.unwrap();
    assert_eq!(newest[0].instagram_reel_code, "reel_new");
}
