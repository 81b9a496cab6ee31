//! Homework statuses endpoint

use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::{PracticumClient, handle_response};

/// Production homework statuses endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

impl PracticumClient {
    /// Fetch homework statuses updated since `from_date`
    ///
    /// Issues exactly one GET with the OAuth header and the `from_date`
    /// query parameter. There are no retries here; the caller decides when
    /// to ask again.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, lower bound of the reported changes
    ///
    /// # Returns
    /// The decoded JSON body. Its shape is not checked.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from {}", from_date);

        let response = self.statuses_request(from_date).send().await?;

        handle_response(response).await
    }

    fn statuses_request(&self, from_date: i64) -> RequestBuilder {
        self.client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_statuses_request() {
        let client = PracticumClient::new(DEFAULT_ENDPOINT, "y0_secret");
        let request = client.statuses_request(1000).build().unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().host_str(), Some("practicum.yandex.ru"));
        assert_eq!(request.url().path(), "/api/user_api/homework_statuses/");
        assert_eq!(request.url().query(), Some("from_date=1000"));
        assert_eq!(request.headers()[AUTHORIZATION], "OAuth y0_secret");
        assert!(request.body().is_none());
    }
}
