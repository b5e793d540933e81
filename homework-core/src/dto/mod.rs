//! Data Transfer Objects for the chat transport
//!
//! Wire payloads exchanged with the Telegram Bot API. The grading API
//! body is deliberately not modelled here; it is validated as raw JSON
//! by [`crate::response`].

pub mod telegram;
