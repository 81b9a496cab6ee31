//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// A request to a remote API failed
///
/// Every variant renders as "API request failed: ..." so callers can treat
/// them as one error kind while keeping the underlying cause.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failure, timeout or another transport problem
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than 200
    #[error("API request failed: endpoint returned status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Start of the response body
        message: String,
    },

    /// The body could not be decoded
    #[error("API request failed: malformed response body: {0}")]
    MalformedBody(String),

    /// The API accepted the request but reported that it did not perform it
    #[error("API request failed: request rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an unexpected status error from status code and body
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Check if the connection could not be established
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }

    /// Render the error without the response body
    ///
    /// Error pages often carry request ids or timestamps, so two replies
    /// for the same outage differ only in their bodies. The summary keeps
    /// the status code and drops the body.
    pub fn summary(&self) -> String {
        match self {
            Self::UnexpectedStatus { status, .. } => {
                format!("API request failed: endpoint returned status {}", status)
            }
            other => other.to_string(),
        }
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 500)
    }
}
