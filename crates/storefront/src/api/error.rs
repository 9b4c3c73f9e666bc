//! Fetch errors.
//!
//! A fetch fails in one of three ways, and each renders differently: the resource
//! is missing, the caller asked for something that cannot exist, or the transport
//! broke. Only the last one is worth retrying.

use thiserror::Error;

/// Failures below the API layer: the request never produced a usable body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The connection failed before any response (also what the mock server simulates).
    #[error("{0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
