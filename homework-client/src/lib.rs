//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients for the two remote services the bot talks to:
//! - [`PracticumClient`] polls the grading API for homework statuses
//! - [`TelegramClient`] delivers text messages through the Telegram Bot API
//!
//! Each call issues exactly one request. Retrying is the caller's decision.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), homework_client::ClientError> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "my-token",
//!     );
//!
//!     let body = client.homework_statuses(1_700_000_000).await?;
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};

/// Longest response excerpt carried in an error message, in characters
///
/// Error messages end up in chat notifications, which have a hard size limit.
pub const MAX_ERROR_BODY_CHARS: usize = 300;

/// Reads a failed response body for use in an error message
async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}

/// Cuts an error body down to [`MAX_ERROR_BODY_CHARS`] on a char boundary
fn clip_error_body(body: &str) -> String {
    let mut chars = body.chars();
    let clipped: String = chars.by_ref().take(MAX_ERROR_BODY_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", clipped)
    } else {
        clipped
    }
}
