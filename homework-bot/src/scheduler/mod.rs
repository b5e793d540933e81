//! Scheduler layer for the bot
//!
//! This layer owns the poll loop: when to ask the grading API for
//! changes, where the next poll window starts, and how a failed cycle
//! is turned into a notification instead of stopping the process.

pub mod clock;
pub mod cursor;
pub mod poller;

pub use clock::SystemClock;
pub use poller::StatusPoller;
