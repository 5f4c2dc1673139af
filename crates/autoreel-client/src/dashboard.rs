use autoreel_core::{ActivityFeed, DashboardStats, TopReels};

use crate::{AutoreelClient, ClientError};

impl AutoreelClient {
    /// `GET /dashboard/stats`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get_json("/dashboard/stats", &[]).await
    }

    /// `GET /dashboard/recent-activity`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn recent_activity(&self) -> Result<ActivityFeed, ClientError> {
        self.get_json("/dashboard/recent-activity", &[]).await
    }

    /// `GET /dashboard/top-performing-reels`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn dashboard_top_reels(&self) -> Result<TopReels, ClientError> {
        self.get_json("/dashboard/top-performing-reels", &[]).await
    }
}
