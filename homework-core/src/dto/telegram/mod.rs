//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// Request body for `sendMessage`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
}

/// Envelope every Bot API method replies with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotReply {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<u16>,
}
