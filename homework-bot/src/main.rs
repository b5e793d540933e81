//! Homework Bot
//!
//! A long-running daemon that watches a homework review and reports
//! status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and timings from the environment, checked once
//! - Repositories: the grading API behind a trait
//! - Services: notification delivery
//! - Scheduler: the poll loop, its cursor and its clock
//!
//! Every cycle fetches the latest homework, formats a status message and
//! sends it. Failed cycles are reported to the same chat, and the loop
//! always sleeps for the configured interval before polling again.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::HttpHomeworkRepository;
use crate::scheduler::{StatusPoller, SystemClock};
use crate::service::TelegramNotifier;
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=info,homework_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Homework Bot");

    match config::load_dotenv() {
        Ok(Some(path)) => info!("Loaded environment file {}", path.display()),
        Ok(None) => debug!("No .env file found, using the process environment"),
        Err(e) => warn!("{:#}", e),
    }

    // Missing secrets abort here, before the first poll
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Cannot start: {:#}", e);
            return Err(e);
        }
    };
    info!("Loaded configuration: endpoint={}", config.endpoint);

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        http,
    );

    let repository = Arc::new(HttpHomeworkRepository::new(practicum));
    let notifier = Arc::new(TelegramNotifier::new(
        telegram,
        config.telegram_chat_id.clone(),
    ));

    info!("Clients initialized");

    let mut poller = StatusPoller::new(config, repository, notifier, Arc::new(SystemClock));
    poller.run().await;

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Invalid environment")?;
    config.validate()?;
    Ok(config)
}
