//! Notification delivery
//!
//! Delivers text messages to the configured chat. Delivery is
//! best-effort: failures are reported to the caller, never retried.

use async_trait::async_trait;
use homework_client::{ClientError, TelegramClient};
use thiserror::Error;
use tracing::info;

/// Failure to deliver a notification
#[derive(Debug, Error)]
#[error("failed to deliver notification: {0}")]
pub struct NotifyError(#[from] pub ClientError);

/// Service for delivering notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers a message to the configured destination
    ///
    /// # Arguments
    /// * `message` - The text to deliver, sent unchanged
    async fn deliver(&self, message: &str) -> Result<(), NotifyError>;
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier that sends to a single chat
    pub fn new(client: TelegramClient, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        self.client.send_message(&self.chat_id, message).await?;
        info!("Notification delivered");
        Ok(())
    }
}
