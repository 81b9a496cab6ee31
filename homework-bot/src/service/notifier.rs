//! Notifier service
//!
//! Sends text to the user and never lets a delivery failure escape: a
//! broken Telegram connection must not stop the poll loop.

use std::sync::Arc;
use tracing::{debug, error};

use crate::repository::MessageRepository;

/// Delivers notifications through a message repository
#[derive(Clone)]
pub struct Notifier {
    messages: Arc<dyn MessageRepository>,
}

impl Notifier {
    /// Creates a new notifier
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// Attempts to deliver `text`
    ///
    /// Transport errors are logged and swallowed.
    ///
    /// # Returns
    /// `true` if the message was delivered
    pub async fn notify(&self, text: &str) -> bool {
        match self.messages.send_text(text).await {
            Ok(()) => {
                debug!("Bot sent message: {}", text);
                true
            }
            Err(e) => {
                error!("Failed to send Telegram message: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fakes::RecordingMessages;

    #[tokio::test]
    async fn test_notify_delivers() {
        let messages = Arc::new(RecordingMessages::new());
        let notifier = Notifier::new(messages.clone());

        assert!(notifier.notify("hello").await);
        assert_eq!(messages.sent(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_notify_swallows_delivery_errors() {
        let messages = Arc::new(RecordingMessages::new());
        messages.set_failing(true);
        let notifier = Notifier::new(messages.clone());

        assert!(!notifier.notify("hello").await);
        assert!(messages.sent().is_empty());
    }
}
