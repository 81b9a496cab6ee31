//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients for the two remote services the homework bot
//! talks to:
//! - the Practicum homework review API, polled for submission statuses
//! - the Telegram Bot API, used to deliver notifications
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = PracticumClient::new(
//!     "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!     "y0_secret",
//! );
//!
//! let body = client.homework_statuses(0).await?;
//! println!("{}", body["homeworks"]);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod homeworks;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use homeworks::DEFAULT_ENDPOINT;
pub use telegram::{DEFAULT_API_URL, TelegramClient};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Longest slice of an error body kept in [`ClientError::UnexpectedStatus`]
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client for the Practicum homework review API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new Practicum client
    ///
    /// # Arguments
    /// * `endpoint` - URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new Practicum client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use homework_client::PracticumClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PracticumClient::with_client("http://localhost:8080/statuses/", "token", http_client);
    /// assert_eq!(client.endpoint(), "http://localhost:8080/statuses/");
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint this client polls
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Read an API response and deserialize its JSON body
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    decode_response(status, &body)
}

/// Turn a status code and raw body into a decoded value
///
/// Only `200 OK` counts as success; any other status is reported together
/// with the start of the body.
pub(crate) fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if status != StatusCode::OK {
        return Err(ClientError::unexpected_status(
            status.as_u16(),
            truncate(body, ERROR_BODY_LIMIT),
        ));
    }

    serde_json::from_str(body).map_err(|e| ClientError::MalformedBody(e.to_string()))
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
