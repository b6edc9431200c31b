//! Error types for the profile and avatar requests.

use thiserror::Error;

/// Failure of a profile fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint string is not a URL; no request was sent.
    #[error("Invalid URL '{endpoint}': {reason}")]
    InvalidUrl { endpoint: String, reason: String },

    /// A response arrived but its status was not 200.
    #[error("Invalid response: HTTP {status}")]
    InvalidResponse { status: u16 },

    /// The body did not decode into a profile.
    #[error("Invalid data: {reason}")]
    InvalidData { reason: String },

    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The fetch task died before producing a result.
    #[error("Fetch task failed: {reason}")]
    Task { reason: String },
}

/// Stable classification of a [`FetchError`], cheap to copy into UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    InvalidUrl,
    InvalidResponse,
    InvalidData,
    Transport,
    Task,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            FetchError::InvalidResponse { .. } => FetchErrorKind::InvalidResponse,
            FetchError::InvalidData { .. } => FetchErrorKind::InvalidData,
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Task { .. } => FetchErrorKind::Task,
        }
    }
}

impl FetchErrorKind {
    /// Error type string for log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::InvalidUrl => "invalid_url",
            FetchErrorKind::InvalidResponse => "invalid_response",
            FetchErrorKind::InvalidData => "invalid_data",
            FetchErrorKind::Transport => "transport_error",
            FetchErrorKind::Task => "task_failed",
        }
    }
}

/// Failure of an avatar download. Only ever shown as the warning icon.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Avatar request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Avatar response: HTTP {status}")]
    InvalidResponse { status: u16 },

    #[error("Avatar decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Avatar task failed: {0}")]
    Task(String),
}
