//! Error types for GitLab API calls.

use thiserror::Error;

/// Result type alias for GitLab API operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the GitLab API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout, or a body cut short.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("GitLab API returned non-200 status {code} for {url}")]
    UpstreamStatus { code: u16, url: String },

    #[error("decode error: {0}")]
    Decode(String),
}
