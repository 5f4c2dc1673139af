use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate counters shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_videos: i64,
    pub active_profiles: i64,
    pub posts_today: i64,
    /// Percentage of reels in `posted` status, one decimal.
    pub success_rate: f64,
    pub posts_yesterday: i64,
    /// Last 30 days vs the 30 before, in percent, one decimal.
    pub monthly_growth: f64,
}

/// A log-like record in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: i64,
    pub level: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub context: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFeed {
    pub activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopReel {
    pub title: String,
    pub views: i64,
    pub likes: i64,
    pub engagement: f64,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopReels {
    pub top_reels: Vec<TopReel>,
}
