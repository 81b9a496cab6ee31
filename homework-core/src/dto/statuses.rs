//! Homework statuses response
//!
//! Expected body: `{ "homeworks": [ {...}, ... ], "current_date": <unix ts> }`

use serde_json::Value;
use thiserror::Error;

/// Key holding the list of homework records
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server's current timestamp
pub const CURRENT_DATE_KEY: &str = "current_date";

/// The response body does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The body is not a JSON object
    #[error("unexpected response shape: expected an object, got {0}")]
    NotAnObject(&'static str),

    /// A required key is absent
    #[error("response has no `{0}` key")]
    MissingKey(&'static str),

    /// A key that should hold a list holds something else
    #[error("unexpected response shape: `{0}` is not a list")]
    NotAList(&'static str),
}

/// Checks that a decoded response body looks like a homework statuses answer
///
/// This is a precondition check only; the body is not transformed.
pub fn check_response(body: &Value) -> Result<(), ResponseError> {
    let fields = body
        .as_object()
        .ok_or_else(|| ResponseError::NotAnObject(json_type(body)))?;

    match fields.get(HOMEWORKS_KEY) {
        None | Some(Value::Null) => Err(ResponseError::MissingKey(HOMEWORKS_KEY)),
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(ResponseError::NotAList(HOMEWORKS_KEY)),
    }
}

/// Borrowed view over a validated response body
#[derive(Debug, Clone, Copy)]
pub struct HomeworkStatuses<'a> {
    /// Homework records, newest first
    pub homeworks: &'a [Value],

    /// Server timestamp of the answer, when reported as an integer
    pub current_date: Option<i64>,
}

impl<'a> HomeworkStatuses<'a> {
    /// Validates the body and borrows its parts
    pub fn from_body(body: &'a Value) -> Result<Self, ResponseError> {
        check_response(body)?;

        let homeworks = body
            .get(HOMEWORKS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let current_date = body.get(CURRENT_DATE_KEY).and_then(Value::as_i64);

        Ok(Self {
            homeworks,
            current_date,
        })
    }

    /// The most recent homework record, if any
    pub fn newest(&self) -> Option<&'a Value> {
        self.homeworks.first()
    }

    /// Whether the response lists no homeworks at all
    pub fn is_empty(&self) -> bool {
        self.homeworks.is_empty()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_response_valid() {
        let body = json!({ "homeworks": [], "current_date": 1000 });
        assert!(check_response(&body).is_ok());
    }

    #[test]
    fn test_check_response_not_an_object() {
        assert_eq!(
            check_response(&json!([{ "homeworks": [] }])),
            Err(ResponseError::NotAnObject("a list"))
        );
        assert_eq!(
            check_response(&json!("homeworks")),
            Err(ResponseError::NotAnObject("a string"))
        );
    }

    #[test]
    fn test_check_response_missing_key() {
        assert_eq!(
            check_response(&json!({ "current_date": 1000 })),
            Err(ResponseError::MissingKey("homeworks"))
        );
        assert_eq!(
            check_response(&json!({ "homeworks": null })),
            Err(ResponseError::MissingKey("homeworks"))
        );
    }

    #[test]
    fn test_check_response_homeworks_not_a_list() {
        assert_eq!(
            check_response(&json!({ "homeworks": { "status": "approved" } })),
            Err(ResponseError::NotAList("homeworks"))
        );
    }

    #[test]
    fn test_statuses_view() {
        let body = json!({
            "homeworks": [
                { "status": "approved", "homework_name": "hw2" },
                { "status": "rejected", "homework_name": "hw1" }
            ],
            "current_date": 1000
        });

        let statuses = HomeworkStatuses::from_body(&body).unwrap();
        assert_eq!(statuses.homeworks.len(), 2);
        assert_eq!(statuses.current_date, Some(1000));
        assert_eq!(statuses.newest().unwrap()["homework_name"], "hw2");
    }

    #[test]
    fn test_statuses_view_without_current_date() {
        let body = json!({ "homeworks": [], "current_date": "yesterday" });

        let statuses = HomeworkStatuses::from_body(&body).unwrap();
        assert!(statuses.is_empty());
        assert!(statuses.newest().is_none());
        assert_eq!(statuses.current_date, None);
    }
}
