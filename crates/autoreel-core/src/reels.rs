use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Lifecycle status of a tracked reel.
///
/// Wire values outside the known set deserialize to [`ReelStatus::Unknown`]
/// so one odd row cannot fail a whole listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReelStatus {
    Pending,
    Posted,
    Failed,
    #[serde(other)]
    Unknown,
}

impl ReelStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReelStatus::Pending => "pending",
            ReelStatus::Posted => "posted",
            ReelStatus::Failed => "failed",
            ReelStatus::Unknown => "unknown",
        }
    }

    /// Display label used by the reels page.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReelStatus::Pending => "Pendente",
            ReelStatus::Posted => "Publicado",
            ReelStatus::Failed => "Falhou",
            ReelStatus::Unknown => "Desconhecido",
        }
    }

    /// Lenient conversion for database rows.
    #[must_use]
    pub fn from_db(raw: &str) -> Self {
        raw.parse().unwrap_or(ReelStatus::Unknown)
    }
}

impl std::fmt::Display for ReelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReelStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ReelStatus::Pending),
            "posted" => Ok(ReelStatus::Posted),
            "failed" => Ok(ReelStatus::Failed),
            other => Err(CoreError::InvalidReelStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelProfile {
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelAnalytics {
    pub views: i64,
    pub likes: i64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    pub id: i64,
    pub instagram_reel_code: String,
    pub instagram_reel_url: Option<String>,
    pub caption: Option<String>,
    pub status: ReelStatus,
    #[serde(default)]
    pub video_file_path: Option<String>,
    #[serde(default)]
    pub tiktok_post_id: Option<String>,
    #[serde(default)]
    pub tiktok_post_url: Option<String>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub profile: Option<ReelProfile>,
    #[serde(default)]
    pub analytics: Option<ReelAnalytics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelList {
    pub reels: Vec<Reel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelStats {
    pub total_reels: i64,
    /// Reels downloaded and waiting to be published (status `pending`).
    pub downloaded_reels: i64,
    pub posted_reels: i64,
    pub total_views: i64,
    pub total_likes: i64,
}
