//! # Error Types
//!
//! Failures that can come out of fetching characters or loading a profile.
//! Every error here is representable as local state; none of them is fatal.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the fetch client, the repository and the image loader
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be constructed (bad base URL, bad image URL)
    #[error("failed to build request for '{url}': {reason}")]
    RequestBuild { url: String, reason: String },

    /// The request was sent but no usable response came back
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not match the expected schema
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Connectivity and status failures
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(StatusCode),

    #[error("server returned an empty body")]
    EmptyBody,
}

impl FetchError {
    /// Status code of the failed response, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Transport(TransportError::Status(status)) => Some(*status),
            FetchError::Transport(TransportError::Network(e)) => e.status(),
            _ => None,
        }
    }
}

/// Errors raised while reading the INI profile
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read profile file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("invalid value '{value}' for '{key}' in profile '{profile}'")]
    InvalidValue {
        profile: String,
        key: &'static str,
        value: String,
    },
}
