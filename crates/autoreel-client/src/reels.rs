use autoreel_core::{ReelList, ReelStats, ReelStatus, TopReels};

use crate::{AutoreelClient, ClientError};

impl AutoreelClient {
    /// `GET /reels`, adding `?status=` only when a filter is given.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn list_reels(&self, status: Option<ReelStatus>) -> Result<ReelList, ClientError> {
        match status {
            Some(s) => self.get_json("/reels", &[("status", s.as_str())]).await,
            None => self.get_json("/reels", &[]).await,
        }
    }

    /// `GET /reels/stats`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn reel_stats(&self) -> Result<ReelStats, ClientError> {
        self.get_json("/reels/stats", &[]).await
    }

    /// `GET /reels/top-performing`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn top_performing_reels(&self) -> Result<TopReels, ClientError> {
        self.get_json("/reels/top-performing", &[]).await
    }
}
