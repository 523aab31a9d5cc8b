//! Error types for the GitHub listing client.

use thiserror::Error;

/// Errors that can occur while listing an organization's repositories.
#[derive(Error, Debug)]
pub enum GithubError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// GitHub answered with a non-success status
    #[error("GitHub returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected repository list
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The configured API URL is unusable
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, GithubError>;
