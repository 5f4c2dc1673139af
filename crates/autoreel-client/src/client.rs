//! Core request plumbing shared by every endpoint group.
//!
//! Endpoint methods live in sibling modules (`dashboard`, `profiles`, ...)
//! as further `impl AutoreelClient` blocks.

use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("autoreel-client/", env!("CARGO_PKG_VERSION"));

/// Client for the AutoReel REST API.
///
/// Holds the HTTP client, the base URL (including the `/api/v1` prefix) and
/// an optional bearer token. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AutoreelClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl AutoreelClient {
    /// Creates a client rooted at `base_url`, e.g. `http://localhost:8000/api/v1`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse
    /// as an absolute http(s) URL, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Builds a client from application config, including the bearer token
    /// when one is configured.
    ///
    /// # Errors
    ///
    /// See [`AutoreelClient::new`].
    pub fn from_config(config: &autoreel_core::AppConfig) -> Result<Self, ClientError> {
        let client = Self::new(&config.api_url, config.request_timeout_secs)?;
        Ok(match &config.api_token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    /// Sends `Authorization: Bearer <token>` on every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `endpoint` (which starts with `/`) to the base path and adds
    /// percent-encoded query parameters.
    pub(crate) fn build_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", self.base_url.path().trim_end_matches('/'), endpoint);
        url.set_path(&path);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Issues `GET {base}{endpoint}` and parses the 2xx body as `T`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::Status`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body does not match `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = self.build_url(endpoint, query);
        tracing::debug!(%url, "GET");

        let mut request = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "API request failed");
            return Err(status_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: endpoint.to_string(),
            source: e,
        })
    }
}

/// Maps a non-2xx response to [`ClientError::Status`], lifting the server's
/// `{"error": {"message": ...}}` envelope into `detail` when present.
fn status_error(status: StatusCode, body: &str) -> ClientError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.get("detail"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        });
    ClientError::Status {
        status: status.as_u16(),
        message: format!(
            "API request failed: {}",
            status.canonical_reason().unwrap_or("Unknown Status")
        ),
        detail,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
