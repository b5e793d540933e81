//! Telegram Bot API client

use homework_core::dto::telegram::{BotReply, SendMessage};
use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{clip_error_body, error_body};

/// Public Bot API host
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
///
/// The bot token is part of every request path, so transport errors have
/// their URL stripped before they leave this client.
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new client against the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_TELEGRAM_API_URL, token, Client::new())
    }

    /// Create a new client with a custom base URL and HTTP client
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Destination chat identifier
    /// * `text` - Message text, sent as-is
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        debug!("Sending message ({} chars)", text.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            let message = serde_json::from_str::<BotReply>(&body)
                .ok()
                .and_then(|reply| reply.description)
                .unwrap_or(body);
            return Err(ClientError::api_error(
                status.as_u16(),
                clip_error_body(&message),
            ));
        }

        let reply: BotReply = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("invalid Bot API reply: {}", e.without_url()))
        })?;

        if !reply.ok {
            return Err(ClientError::api_error(
                reply.error_code.unwrap_or(status.as_u16()),
                reply
                    .description
                    .unwrap_or_else(|| "Bot API reported failure".to_string()),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
