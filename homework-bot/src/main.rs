//! Homework Status Bot
//!
//! Watches the Practicum review API for the status of the latest homework
//! submission and reports every change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and polling parameters from the environment
//! - Repositories: HTTP access to the review API and the Telegram Bot API
//! - Services: notification delivery that never fails the caller
//! - Scheduler: the fixed-period poll loop and its error reporting policy

mod config;
mod logging;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::repository::{
    HomeworkRepository, HttpHomeworkRepository, MessageRepository, TelegramMessageRepository,
};
use crate::scheduler::{LoopState, StatusPoller};
use crate::service::Notifier;
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the environment.
    dotenvy::dotenv().ok();

    let _log_guard = logging::init(&config::log_dir())?;

    info!("Starting homework status bot");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            error!("Stopping: the bot cannot run without a complete configuration");
            return Err(e);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.credentials.telegram_chat_id
    );

    let practicum = PracticumClient::new(
        config.endpoint.clone(),
        config.credentials.practicum_token.clone(),
    );
    let telegram = TelegramClient::new(
        config.telegram_api_url.clone(),
        config.credentials.telegram_token.clone(),
    );

    let homeworks: Arc<dyn HomeworkRepository> = Arc::new(HttpHomeworkRepository::new(practicum));
    let messages: Arc<dyn MessageRepository> = Arc::new(TelegramMessageRepository::new(
        telegram,
        config.credentials.telegram_chat_id.clone(),
    ));

    let poller = StatusPoller::new(config.retry_period, homeworks, Notifier::new(messages));

    let from_date = config
        .from_date
        .unwrap_or_else(|| chrono::Utc::now().timestamp());

    tokio::select! {
        _ = poller.run(LoopState::new(from_date)) => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for shutdown signal")?;
            info!("Received interrupt, shutting down");
        }
    }

    Ok(())
}

/// Loads and validates configuration from the environment
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;
    Ok(config)
}
