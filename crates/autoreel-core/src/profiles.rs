use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A monitored source account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub last_checked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_posted_at: Option<DateTime<Utc>>,
    pub check_interval_minutes: i32,
    /// Number of reels recorded for this profile.
    pub posts_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileList {
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_profiles: i64,
    pub active_profiles: i64,
    pub total_posts: i64,
}
