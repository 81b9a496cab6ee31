//! Bot configuration
//!
//! Credentials and polling parameters, read once at startup from the
//! environment. A `.env` file in the working directory is loaded into the
//! environment before this runs.

use homework_client::{DEFAULT_API_URL, DEFAULT_ENDPOINT};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::error;

/// Default pause between two polls
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Errors raised while reading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more secrets are absent or empty
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// An optional variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Secrets the bot cannot run without
#[derive(Clone)]
pub struct Credentials {
    /// OAuth token for the Practicum API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Tokens and the recipient chat
    pub credentials: Credentials,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause after every poll, successful or not
    pub retry_period: Duration,

    /// Initial watermark; `None` means "now"
    pub from_date: Option<i64>,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: production endpoint)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - FROM_DATE (optional, unix timestamp, default: now)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates configuration from an arbitrary variable source
    ///
    /// Every missing credential is logged and reported, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |name: &'static str| {
            let value = non_empty(name);
            if value.is_none() {
                error!("Missing required environment variable {}", name);
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let credentials = Credentials {
            practicum_token: require(PRACTICUM_TOKEN),
            telegram_token: require(TELEGRAM_TOKEN),
            telegram_chat_id: require(TELEGRAM_CHAT_ID),
        };

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        let retry_period = parse_optional::<u64>(&non_empty, "RETRY_PERIOD")?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RETRY_PERIOD);

        let from_date = parse_optional::<i64>(&non_empty, "FROM_DATE")?;

        Ok(Self {
            credentials,
            endpoint: non_empty("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: non_empty("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            retry_period,
            from_date,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_period.is_zero() {
            anyhow::bail!("retry_period must be greater than 0");
        }

        if matches!(self.from_date, Some(ts) if ts < 0) {
            anyhow::bail!("from_date cannot be negative");
        }

        Ok(())
    }
}

/// Directory for the rotating log file (`LOG_DIR`, default: current directory)
///
/// Read separately from [`Config`] because logging starts before the
/// configuration is loaded.
pub fn log_dir() -> PathBuf {
    std::env::var_os("LOG_DIR")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_optional<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidValue { name, value })
        })
        .transpose()
}
