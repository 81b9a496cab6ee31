//! Poll cycle errors

use homework_client::ClientError;
use homework_core::{HomeworkError, ResponseError};
use thiserror::Error;

/// Prefix of every error notification sent to the user
const ERROR_NOTIFICATION_PREFIX: &str = "Сбой в работе программы";

/// Anything that can go wrong between fetching and parsing
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Api(#[from] ClientError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Homework(#[from] HomeworkError),
}

/// Coarse category of a [`PollError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport, status or body decoding failure
    ApiRequest,

    /// Response body of the wrong shape
    Response,

    /// Homework record that cannot be understood
    Homework,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::ApiRequest => write!(f, "api request"),
            ErrorKind::Response => write!(f, "response"),
            ErrorKind::Homework => write!(f, "homework"),
        }
    }
}

/// What the loop remembers about an error it has told the user about
///
/// Two errors are the same notification if kind and message both match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ReportedError {
    /// Text sent to the user
    pub fn notification(&self) -> String {
        format!("{}: {}", ERROR_NOTIFICATION_PREFIX, self.message)
    }
}

impl PollError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PollError::Api(_) => ErrorKind::ApiRequest,
            PollError::Response(_) => ErrorKind::Response,
            PollError::Homework(_) => ErrorKind::Homework,
        }
    }

    /// What the user is told, and what repeats are compared by
    ///
    /// API errors leave out the response body; the full error is logged.
    pub fn report(&self) -> ReportedError {
        let message = match self {
            PollError::Api(e) => e.summary(),
            other => other.to_string(),
        };

        ReportedError {
            kind: self.kind(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let api = PollError::from(ClientError::unexpected_status(500, "down"));
        let response = PollError::from(ResponseError::MissingKey("homeworks"));
        let homework = PollError::from(HomeworkError::MissingName);

        assert_eq!(api.kind(), ErrorKind::ApiRequest);
        assert_eq!(response.kind(), ErrorKind::Response);
        assert_eq!(homework.kind(), ErrorKind::Homework);
    }

    #[test]
    fn test_report_equality() {
        let first = PollError::from(ClientError::unexpected_status(500, "down")).report();
        let again = PollError::from(ClientError::unexpected_status(500, "down")).report();
        let other = PollError::from(ClientError::unexpected_status(502, "down")).report();

        assert_eq!(first, again);
        assert_ne!(first, other);
    }

    #[test]
    fn test_report_ignores_error_body() {
        let first = PollError::from(ClientError::unexpected_status(500, "request req-1")).report();
        let second = PollError::from(ClientError::unexpected_status(500, "request req-2")).report();

        assert_eq!(first, second);
        assert_eq!(
            first.notification(),
            "Сбой в работе программы: API request failed: endpoint returned status 500"
        );
    }

    #[test]
    fn test_notification_text() {
        let report = PollError::from(ResponseError::MissingKey("homeworks")).report();
        assert_eq!(
            report.notification(),
            "Сбой в работе программы: response has no `homeworks` key"
        );
    }
}
