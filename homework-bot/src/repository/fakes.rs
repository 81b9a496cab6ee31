//! In-memory repositories for tests

use async_trait::async_trait;
use homework_client::ClientError;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{HomeworkRepository, MessageRepository};

/// One scripted answer of the fake review API
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this body
    Body(Value),
    /// Any other status
    Status(u16),
    /// Any other status with this error body
    StatusBody(u16, &'static str),
    /// 200 with an undecodable body
    Garbage,
}

impl Reply {
    fn to_result(&self) -> Result<Value, ClientError> {
        match self {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status) => Err(ClientError::unexpected_status(*status, "scripted")),
            Reply::StatusBody(status, body) => {
                Err(ClientError::unexpected_status(*status, *body))
            }
            Reply::Garbage => Err(ClientError::MalformedBody(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }
}

/// Replays scripted replies in order, repeating the last one forever
pub struct ScriptedHomeworks {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<i64>>,
}

impl ScriptedHomeworks {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `from_date` of every request made so far
    pub fn requests(&self) -> Vec<i64> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HomeworkRepository for ScriptedHomeworks {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError> {
        self.requests.lock().unwrap().push(from_date);

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };

        reply
            .expect("no scripted reply left")
            .to_result()
    }
}

/// Records sent messages; can be switched into a failing mode
#[derive(Default)]
pub struct RecordingMessages {
    sent: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl RecordingMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages delivered successfully
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRepository for RecordingMessages {
    async fn send_text(&self, text: &str) -> Result<(), ClientError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Rejected("Bad Request: chat not found".to_string()));
        }

        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
