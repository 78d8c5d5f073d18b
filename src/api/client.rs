//! HTTP client for the user directory API.
//!
//! The client performs a single best-effort fetch of a fixed-size batch of
//! users. There is no retry and no cancellation; a failed fetch is reported
//! once and the caller keeps whatever records it already holds.

use std::time::Duration;

use reqwest::{header, Client, Response};
use tracing::{debug, instrument, warn};

use super::error::{ApiError, Result};
use super::types::UserRecord;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for the public user directory.
const DEFAULT_BASE_URL: &str = "https://random-data-api.com";

/// Number of records requested per fetch.
pub const DEFAULT_BATCH_SIZE: u32 = 100;

/// The user directory API client.
#[derive(Debug, Clone)]
pub struct UserClient {
    /// The HTTP client.
    client: Client,
    /// The base URL for the directory service.
    base_url: String,
}

impl UserClient {
    /// Create a client against the default directory endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit base URL.
    ///
    /// Use this for testing against a local server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Fetch a batch of users.
    ///
    /// Issues one `GET /api/v2/users?size=<count>` and parses the body as a
    /// JSON array of [`UserRecord`].
    #[instrument(skip(self))]
    pub async fn fetch_users(&self, count: u32) -> Result<Vec<UserRecord>> {
        let url = self.users_url(count);
        debug!(url = %url, "Fetching user batch");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let users = handle_response(response).await?;
        debug!(received = users.len(), "User batch fetched");
        Ok(users)
    }

    /// Build the batch URL for the given record count.
    fn users_url(&self, count: u32) -> String {
        format!("{}/api/v2/users?size={}", self.base_url, count)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Check the HTTP status and parse the JSON body.
async fn handle_response(response: Response) -> Result<Vec<UserRecord>> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    } else {
        let body = response.text().await.unwrap_or_default();
        debug!("Error response body: {}", body);
        Err(ApiError::from_status(status, &body))
    }
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');

    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}", url);
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_removes_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://random-data-api.com/"),
            "https://random-data-api.com"
        );
    }

    #[test]
    fn test_normalize_base_url_handles_multiple_slashes() {
        assert_eq!(
            normalize_base_url("https://random-data-api.com///"),
            "https://random-data-api.com"
        );
    }

    #[test]
    fn test_users_url_includes_batch_size() {
        let client = UserClient::new().unwrap();
        assert_eq!(
            client.users_url(100),
            "https://random-data-api.com/api/v2/users?size=100"
        );
    }

    #[test]
    fn test_with_base_url_normalizes() {
        let client = UserClient::with_base_url("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.users_url(5),
            "http://localhost:8080/api/v2/users?size=5"
        );
    }
}
