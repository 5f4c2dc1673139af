use thiserror::Error;

/// Errors returned by [`crate::AutoreelClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    ///
    /// `message` is always `"API request failed: <reason>"`; `detail` holds
    /// the server's own error message when the body carried one.
    #[error("{message} ({status})")]
    Status {
        status: u16,
        message: String,
        detail: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// HTTP status for [`ClientError::Status`], `None` for transport failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
