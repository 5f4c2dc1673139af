use autoreel_core::{ProfileList, ProfileStats};

use crate::{AutoreelClient, ClientError};

impl AutoreelClient {
    /// `GET /profiles`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn list_profiles(&self) -> Result<ProfileList, ClientError> {
        self.get_json("/profiles", &[]).await
    }

    /// `GET /profiles/stats`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn profile_stats(&self) -> Result<ProfileStats, ClientError> {
        self.get_json("/profiles/stats", &[]).await
    }
}
