//! API error types for the user directory client.

use thiserror::Error;

/// Errors that can occur when fetching from the directory API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rate limited by the directory API.
    #[error("Rate limited: please wait before retrying")]
    RateLimited,

    /// Directory server error.
    #[error("Server error: {0}")]
    ServerError(String),

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid response from the API.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from a non-2xx HTTP status code.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(format!("HTTP {}: {}", status, context)),
            _ => ApiError::ServerError(format!("Unexpected HTTP {}: {}", status, context)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_from_status_429() {
        let err = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, "test");
        assert!(matches!(err, ApiError::RateLimited));
    }

    #[test]
    fn test_error_from_status_500() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "test");
        assert!(matches!(err, ApiError::ServerError(_)));
    }

    #[test]
    fn test_error_from_status_unexpected() {
        let err = ApiError::from_status(StatusCode::IM_A_TEAPOT, "test");
        match err {
            ApiError::ServerError(msg) => assert!(msg.contains("Unexpected")),
            _ => panic!("Expected ServerError"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::RateLimited;
        assert_eq!(err.to_string(), "Rate limited: please wait before retrying");

        let err = ApiError::InvalidResponse("not json".to_string());
        assert_eq!(err.to_string(), "Invalid API response: not json");
    }
}
