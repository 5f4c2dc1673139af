use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Reporting window for analytics endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
        TimeRange::OneYear,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7d",
            TimeRange::ThirtyDays => "30d",
            TimeRange::NinetyDays => "90d",
            TimeRange::OneYear => "1y",
        }
    }

    #[must_use]
    pub fn days(self) -> i64 {
        match self {
            TimeRange::SevenDays => 7,
            TimeRange::ThirtyDays => 30,
            TimeRange::NinetyDays => 90,
            TimeRange::OneYear => 365,
        }
    }

    /// Query-string parsing used by the server: anything unrecognized,
    /// including a missing value, falls back to seven days.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|r| r.parse().ok()).unwrap_or_default()
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7d" => Ok(TimeRange::SevenDays),
            "30d" => Ok(TimeRange::ThirtyDays),
            "90d" => Ok(TimeRange::NinetyDays),
            "1y" => Ok(TimeRange::OneYear),
            other => Err(CoreError::InvalidTimeRange(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsMetrics {
    pub total_views: i64,
    pub total_likes: i64,
    pub total_shares: i64,
    pub avg_engagement: f64,
    pub growth_percentage: f64,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub top_country: String,
    pub country_percentage: f64,
    pub age_range: String,
    pub age_percentage: f64,
    pub device: String,
    pub device_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPatterns {
    pub best_posting_time: String,
    pub best_day: String,
    pub avg_watch_time: String,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPerformance {
    pub most_engaging_type: String,
    pub avg_engagement_rate: f64,
    pub viral_threshold: f64,
    pub top_hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceInsights {
    pub demographics: Demographics,
    pub engagement_patterns: EngagementPatterns,
    pub content_performance: ContentPerformance,
}

/// One day of the performance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub views: i64,
    pub likes: i64,
    pub posts: i64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceChart {
    pub chart_data: Vec<ChartPoint>,
}
