//! Messages repository
//!
//! Delivers text messages to the one chat the bot reports to.

use async_trait::async_trait;
use homework_client::{ClientError, TelegramClient};

/// Repository trait for outgoing messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends a text message to the configured recipient
    async fn send_text(&self, text: &str) -> Result<(), ClientError>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// Creates a new Telegram message repository
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Recipient of every message
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send_text(&self, text: &str) -> Result<(), ClientError> {
        self.client.send_message(&self.chat_id, text).await
    }
}
