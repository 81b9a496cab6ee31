//! Homework domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading a single homework record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomeworkError {
    /// The record is not a JSON object
    #[error("homework record is not an object")]
    NotAnObject,

    /// The record has no `status` field
    #[error("homework record has no status")]
    MissingStatus,

    /// The status is outside the known vocabulary
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    /// `homework_name` is absent or empty
    #[error("homework record has no homework_name")]
    MissingName,
}

/// Review status of a homework submission
///
/// The review API only ever reports these three values. Anything else is
/// treated as an error rather than skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    /// Accepted by the reviewer
    Approved,

    /// Taken for review
    Reviewing,

    /// Returned with remarks
    Rejected,
}

impl HomeworkStatus {
    /// All statuses the bot understands
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Wire name used by the review API
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the user
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = HomeworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeworkStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| HomeworkError::UnknownStatus(s.to_string()))
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The newest homework submission, as far as the bot cares about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Name of the submitted work
    pub name: String,

    /// Current review status
    pub status: HomeworkStatus,
}

impl Homework {
    /// Reads a homework out of one raw API record
    ///
    /// The status is checked before the name, so a record with both fields
    /// broken reports the status problem.
    pub fn from_record(record: &Value) -> Result<Self, HomeworkError> {
        let fields = record.as_object().ok_or(HomeworkError::NotAnObject)?;

        let status = match fields.get("status") {
            None | Some(Value::Null) => return Err(HomeworkError::MissingStatus),
            Some(Value::String(s)) => s.parse::<HomeworkStatus>()?,
            Some(other) => return Err(HomeworkError::UnknownStatus(other.to_string())),
        };

        let name = fields
            .get("homework_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(HomeworkError::MissingName)?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }

    /// Notification text announcing this homework's status
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Parses one homework record into the notification text for it
pub fn parse_status(record: &Value) -> Result<String, HomeworkError> {
    Homework::from_record(record).map(|homework| homework.status_message())
}
