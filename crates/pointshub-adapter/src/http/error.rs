/*
[INPUT]:  Error sources (transport failures, HTTP statuses, local preconditions)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the PointsHub adapter
#[derive(Error, Debug)]
pub enum PointsHubError {
    /// Could not reach the server (DNS failure, refused or dropped connection)
    #[error("connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The configured deadline elapsed before a response arrived
    #[error("request timed out: {message}")]
    Timeout {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Missing or rejected credentials
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// Server-side failure (5xx)
    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },

    /// Request rejected by the server (4xx other than 401/403)
    #[error("client error (status {status}): {message}")]
    Client { status: u16, message: String },

    /// Local precondition failed before any network I/O
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Endpoint called outside an open session
    #[error("session not open, call open() before issuing requests")]
    NotConnected,

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Anything that does not fit the categories above
    #[error("unexpected error: {message}")]
    Unexpected {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl PointsHubError {
    /// Classify a transport-level failure, no response was received.
    ///
    /// Connection-level failures win over deadline failures: a connect
    /// timeout reports both and is still a connectivity problem.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() {
            PointsHubError::Connection {
                message: err.to_string(),
                source: Some(err),
            }
        } else if err.is_timeout() {
            PointsHubError::Timeout {
                message: err.to_string(),
                source: Some(err),
            }
        } else {
            PointsHubError::Unexpected {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }

    /// Classify a non-success HTTP status with the server-supplied message
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                PointsHubError::Authentication { message }
            }
            s if s.is_server_error() => PointsHubError::Server {
                status: s.as_u16(),
                message,
            },
            s => PointsHubError::Client {
                status: s.as_u16(),
                message,
            },
        }
    }

    /// Check if error indicates an authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, PointsHubError::Authentication { .. })
    }

    /// Check if the failure belongs to the client-error class.
    ///
    /// Covers server rejections and local validation failures.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PointsHubError::Client { .. } | PointsHubError::Validation { .. }
        )
    }

    /// Hint for caller-side retry policy.
    ///
    /// The adapter itself never retries; `buy` in particular is not
    /// idempotent and must not be retried blindly.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PointsHubError::Connection { .. }
                | PointsHubError::Timeout { .. }
                | PointsHubError::Server { .. }
        )
    }

    /// HTTP status attached to the error, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            PointsHubError::Server { status, .. } | PointsHubError::Client { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Result type alias for PointsHub operations
pub type Result<T> = std::result::Result<T, PointsHubError>;
