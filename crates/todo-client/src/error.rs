//! Client error types.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Message shown when a write could not be confirmed by the store.
pub const SERVER_UNAVAILABLE: &str = "Failed to connect with the server! Please try later.";

/// Every way a call to the remote store can fail.
///
/// The variants only exist for logging; callers treat them alike.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{msg} (status {0})", msg = SERVER_UNAVAILABLE)]
    Status(u16),

    /// A write failed for a reason other than a status; cause kept for logs.
    #[error("{msg} ({0})", msg = SERVER_UNAVAILABLE)]
    Connectivity(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status(_) | ApiError::Connectivity(_) => SERVER_UNAVAILABLE.to_string(),
            other => other.to_string(),
        }
    }

    /// Collapse any failure into the connectivity error shown for writes.
    pub fn into_connectivity(self) -> Self {
        match self {
            ApiError::Network(cause) | ApiError::Decode(cause) => ApiError::Connectivity(cause),
            other => other,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
