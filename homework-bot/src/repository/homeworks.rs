//! Homeworks repository
//!
//! Fetches the raw homework statuses body from the grading API.

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient};
use serde_json::Value as JsonValue;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches statuses changed since the given Unix timestamp
    ///
    /// Issues exactly one request; the caller owns any retry decision.
    ///
    /// # Arguments
    /// * `since` - Lower bound of the poll window
    async fn fetch_statuses(&self, since: i64) -> Result<JsonValue, ClientError>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    /// Creates a new HTTP homework repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, since: i64) -> Result<JsonValue, ClientError> {
        self.client.homework_statuses(since).await
    }
}
