//! Error types for the creature-data client.

use thiserror::Error;

/// Errors that can occur while talking to the upstream service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream answered 404 for the requested resource
    #[error("'{resource}' not found")]
    NotFound { resource: String },

    /// Transport failure: DNS, connect, TLS, timeout or a broken body
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream returned a non-success status other than 404
    #[error("Upstream error: {status} from '{url}'")]
    Upstream { status: u16, url: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Base URL cannot be extended with resource paths
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Short classification for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not_found",
            ApiError::Network { .. } => "network",
            ApiError::Upstream { .. } => "upstream",
            ApiError::Decode { .. } => "decode",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Client { .. } => "client",
        }
    }
}
