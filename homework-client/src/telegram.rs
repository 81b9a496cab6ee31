//! Telegram Bot API client
//!
//! Only the `sendMessage` method is needed: the bot never reads updates.

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::decode_response;

/// Default Telegram Bot API location
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API, without trailing slash
    api_url: String,
    /// Bot token; part of every method URL
    bot_token: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Telegram client
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the Bot API (e.g., "https://api.telegram.org")
    /// * `bot_token` - Token issued by BotFather
    pub fn new(api_url: impl Into<String>, bot_token: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            client: Client::new(),
        }
    }

    /// Get the base URL of the Bot API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.bot_token, method)
    }

    /// Send a plain text message
    ///
    /// # Arguments
    /// * `chat_id` - Recipient chat identifier
    /// * `text` - Message text
    ///
    /// # Example
    /// ```no_run
    /// # use homework_client::TelegramClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = TelegramClient::new("https://api.telegram.org", "123:abc");
    /// client.send_message("42", "hello").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending Telegram message to chat {}", chat_id);

        // The method URL embeds the bot token, keep it out of error messages.
        let response = self
            .send_message_request(chat_id, text)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        decode_reply(status, &body)
    }

    fn send_message_request(&self, chat_id: &str, text: &str) -> RequestBuilder {
        self.client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("bot_token", &"<redacted>")
            .finish()
    }
}

fn check_reply(reply: BotApiReply) -> Result<()> {
    if reply.ok {
        return Ok(());
    }

    Err(ClientError::Rejected(
        reply
            .description
            .unwrap_or_else(|| "no description".to_string()),
    ))
}

/// Decode a Bot API answer, failing on `"ok": false`
fn decode_reply(status: reqwest::StatusCode, body: &str) -> Result<()> {
    decode_response::<BotApiReply>(status, body).and_then(check_reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::{Method, StatusCode};

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TelegramClient::new("https://api.telegram.org/", "123:abc");
        assert_eq!(client.api_url(), "https://api.telegram.org");
    }

    #[test]
    fn test_method_url() {
        let client = TelegramClient::new(DEFAULT_API_URL, "123:abc");
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let client = TelegramClient::new(DEFAULT_API_URL, "123:abc");
        assert!(!format!("{:?}", client).contains("123:abc"));
    }

    #[test]
    fn test_send_message_request() {
        let client = TelegramClient::new(DEFAULT_API_URL, "123:abc");
        let request = client.send_message_request("42", "hi").build().unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");

        let body = request.body().and_then(|body| body.as_bytes()).unwrap();
        let payload: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(payload, serde_json::json!({ "chat_id": "42", "text": "hi" }));
    }

    #[test]
    fn test_reply_ok() {
        let body = r#"{"ok": true, "result": {"message_id": 1}}"#;
        assert!(decode_reply(StatusCode::OK, body).is_ok());
    }

    #[test]
    fn test_reply_not_ok() {
        let body = r#"{"ok": false, "description": "Bad Request: chat not found"}"#;

        match decode_reply(StatusCode::OK, body) {
            Err(ClientError::Rejected(description)) => {
                assert_eq!(description, "Bad Request: chat not found")
            }
            other => panic!("expected rejected error, got {:?}", other),
        }
    }

    #[test]
    fn test_reply_error_status() {
        let body = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;
        assert!(matches!(
            decode_reply(StatusCode::UNAUTHORIZED, body),
            Err(ClientError::UnexpectedStatus { status: 401, .. })
        ));
    }
}
