use thiserror::Error;

/// Errors returned by [`GitLabClient`](crate::GitLabClient) operations.
///
/// Each failure mode is a distinct variant so callers can tell "the server
/// answered with an error status" apart from "the server was unreachable"
/// and "the body was not the expected shape".
#[derive(Error, Debug)]
pub enum GitLabError {
    /// The server responded with a non-success HTTP status.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never completed (DNS failure, connection refused,
    /// timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded as the declared shape.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The client could not be constructed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GitLabError>;

impl GitLabError {
    /// The HTTP status the server answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            GitLabError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server answered 404, e.g. for an artifact path that
    /// does not exist on the job.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitLabError::Api { status: 404, .. })
    }

    /// Whether the server rejected the bearer token (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            GitLabError::Api {
                status: 401 | 403,
                ..
            }
        )
    }
}
