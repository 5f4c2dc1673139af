pub mod analytics;
pub mod app_config;
pub mod config;
pub mod dashboard;
pub mod engagement;
pub mod format;
pub mod logs;
pub mod palette;
pub mod profiles;
pub mod reels;
pub mod seed;

pub use analytics::{
    AnalyticsMetrics, AudienceInsights, ChartPoint, ContentPerformance, Demographics,
    EngagementPatterns, PerformanceChart, TimeRange,
};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dashboard::{ActivityFeed, ActivityItem, DashboardStats, TopReel, TopReels};
pub use format::{format_count, format_percent, format_time_ago};
pub use logs::{LogEntry, LogList};
pub use palette::{CommandPalette, PaletteCommand};
pub use profiles::{Profile, ProfileList, ProfileStats};
pub use reels::{Reel, ReelAnalytics, ReelList, ReelProfile, ReelStats, ReelStatus};
pub use seed::{load_seed, SeedFile, SeedLog, SeedProfile, SeedReel};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid reel status: {0}")]
    InvalidReelStatus(String),
    #[error("invalid time range: {0}")]
    InvalidTimeRange(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    SeedFileParse(#[source] serde_yaml::Error),

    #[error("seed validation failed: {0}")]
    Validation(String),
}
