//! Homework Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: the status catalog and homework records
//! - Response validation: extracting the latest homework from a raw API body
//! - Message formatting: turning a homework record into a chat notification
//! - DTOs: payloads exchanged with the chat transport
//!
//! Nothing in here performs I/O; the client and bot crates own the network.

pub mod domain;
pub mod dto;
pub mod message;
pub mod response;

pub use domain::homework::HomeworkRecord;
pub use domain::status::HomeworkStatus;
pub use message::{FormatError, format_status};
pub use response::{ResponseError, validate_response};
