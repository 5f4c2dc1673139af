//! Simulated engagement figures.
//!
//! No TikTok analytics source is wired in, so views and likes are derived
//! from a stable hash of the reel code (or of a date key for the chart).
//! The same input always yields the same numbers, across processes.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::analytics::ChartPoint;
use crate::dashboard::TopReel;
use crate::format::truncate;
use crate::reels::ReelAnalytics;

/// Average views credited to each posted reel in aggregate stats.
pub const AVG_VIEWS_PER_POST: i64 = 15_000;
/// Average likes credited to each posted reel in aggregate stats.
pub const AVG_LIKES_PER_POST: i64 = 800;
/// Average shares credited to each posted reel in aggregate stats.
pub const AVG_SHARES_PER_POST: i64 = 120;

const TITLE_MAX_CHARS: usize = 50;

/// First eight bytes of the SHA-256 digest of `key`, big-endian.
#[must_use]
pub fn stable_hash(key: &str) -> u64 {
    let digest = Sha256::digest(key.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// `likes / views * 100`, rounded to one decimal; zero when there are no views.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn engagement_rate(likes: i64, views: i64) -> f64 {
    if views <= 0 {
        return 0.0;
    }
    round1(likes as f64 / views as f64 * 100.0)
}

/// Rounds to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole * 100` rounded to one decimal, or zero when `whole` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

/// Relative change from `previous` to `current` in percent; zero without a baseline.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn growth(current: i64, previous: i64) -> f64 {
    if previous <= 0 {
        return 0.0;
    }
    round1((current - previous) as f64 / previous as f64 * 100.0)
}

fn bucket(hash: u64, modulus: u64, offset: i64) -> i64 {
    // modulus is small, so the remainder always fits
    i64::try_from(hash % modulus).unwrap_or(0) + offset
}

/// Per-reel figures shown in the reel listing. Only posted reels carry these.
#[must_use]
pub fn listing_analytics(reel_code: &str) -> ReelAnalytics {
    let h = stable_hash(reel_code);
    let views = bucket(h, 50_000, 1_000);
    let likes = bucket(h, 5_000, 100);
    ReelAnalytics {
        views,
        likes,
        engagement: engagement_rate(likes, views),
    }
}

/// Builds a top-performing entry for a posted reel.
#[must_use]
pub fn top_reel(
    reel_code: &str,
    caption: Option<&str>,
    posted_at: Option<chrono::DateTime<chrono::Utc>>,
) -> TopReel {
    let h = stable_hash(reel_code);
    let views = bucket(h, 50_000, 5_000);
    let likes = bucket(h, 3_000, 200);
    let title = match caption {
        Some(c) if !c.is_empty() => truncate(c, TITLE_MAX_CHARS),
        _ => "Untitled".to_string(),
    };
    TopReel {
        title,
        views,
        likes,
        engagement: engagement_rate(likes, views),
        posted_at,
    }
}

/// Sorts by views descending and keeps the first `limit` entries.
#[must_use]
pub fn rank_top_reels(mut reels: Vec<TopReel>, limit: usize) -> Vec<TopReel> {
    reels.sort_by(|a, b| b.views.cmp(&a.views));
    reels.truncate(limit);
    reels
}

/// Simulated chart point for one day.
#[must_use]
pub fn chart_point(date: NaiveDate) -> ChartPoint {
    let key = date.format("%Y-%m-%d").to_string();
    let views = bucket(stable_hash(&format!("{key}_views")), 5_000, 1_000);
    let likes = bucket(stable_hash(&format!("{key}_likes")), 300, 50);
    let posts = bucket(stable_hash(&format!("{key}_posts")), 5, 1);
    ChartPoint {
        date,
        views,
        likes,
        posts,
        engagement: engagement_rate(likes, views),
    }
}

/// One point per day for the `days` days ending on `today`, oldest first.
#[must_use]
pub fn chart_series(today: NaiveDate, days: i64) -> Vec<ChartPoint> {
    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_signed(chrono::Duration::days(back)))
        .map(chart_point)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_hash_is_deterministic() {
        assert_eq!(stable_hash("reel_001"), stable_hash("reel_001"));
        assert_ne!(stable_hash("reel_001"), stable_hash("reel_002"));
    }

    #[test]
    fn listing_analytics_within_bounds() {
        for code in ["reel_001", "reel_002", "CxYz123", ""] {
            let a = listing_analytics(code);
            assert!((1_000..51_000).contains(&a.views), "views {}", a.views);
            assert!((100..5_100).contains(&a.likes), "likes {}", a.likes);
            assert_eq!(a.engagement, engagement_rate(a.likes, a.views));
        }
    }

    #[test]
    fn top_reel_truncates_long_caption() {
        let caption = "a".repeat(60);
        let top = top_reel("reel_010", Some(&caption), None);
        assert_eq!(top.title.chars().count(), 53);
        assert!(top.title.ends_with("..."));
        assert!((5_000..55_000).contains(&top.views));
        assert!((200..3_200).contains(&top.likes));
    }

    #[test]
    fn top_reel_without_caption_is_untitled() {
        assert_eq!(top_reel("x", None, None).title, "Untitled");
        assert_eq!(top_reel("x", Some(""), None).title, "Untitled");
    }

    #[test]
    fn rank_top_reels_sorts_and_limits() {
        let reels: Vec<TopReel> = (0..8)
            .map(|i| top_reel(&format!("reel_{i:03}"), Some("t"), None))
            .collect();
        let ranked = rank_top_reels(reels, 5);
        assert_eq!(ranked.len(), 5);
        assert!(ranked.windows(2).all(|w| w[0].views >= w[1].views));
    }

    #[test]
    fn engagement_rate_handles_zero_views() {
        assert_eq!(engagement_rate(10, 0), 0.0);
        assert_eq!(engagement_rate(892, 15420), 5.8);
    }

    #[test]
    fn percentage_and_growth() {
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(growth(15, 10), 50.0);
        assert_eq!(growth(5, 10), -50.0);
        assert_eq!(growth(7, 0), 0.0);
    }

    #[test]
    fn chart_series_covers_range_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let series = chart_series(today, 7);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(series[6].date, today);
        for p in &series {
            assert!((1_000..6_000).contains(&p.views));
            assert!((50..350).contains(&p.likes));
            assert!((1..6).contains(&p.posts));
        }
    }
}
