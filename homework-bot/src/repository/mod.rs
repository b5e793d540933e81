//! Repository layer
//!
//! Repositories are stateless adapters over the grading API client.
//! They give the poller a narrow, trait-based interface so it can be
//! driven by in-memory fakes in tests.

mod homeworks;

pub use homeworks::{HomeworkRepository, HttpHomeworkRepository};
