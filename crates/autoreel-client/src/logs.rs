use autoreel_core::LogList;

use crate::{AutoreelClient, ClientError};

impl AutoreelClient {
    /// `GET /logs?level=&limit=`; `level` is omitted when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-2xx status, or an
    /// unexpected body.
    pub async fn list_logs(&self, level: Option<&str>, limit: u32) -> Result<LogList, ClientError> {
        let limit = limit.to_string();
        let mut query = vec![("limit", limit.as_str())];
        if let Some(level) = level {
            query.push(("level", level));
        }
        self.get_json("/logs", &query).await
    }
}
