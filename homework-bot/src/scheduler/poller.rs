//! Homework status poller
//!
//! Polls the grading API on a fixed interval, turns the latest homework
//! into a notification and delivers it. Any failure inside a cycle is
//! reported to the chat and the loop carries on; only the process dying
//! stops it.

use std::sync::Arc;

use homework_core::{format_status, validate_response};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::CycleError;
use crate::repository::HomeworkRepository;
use crate::scheduler::clock::Clock;
use crate::scheduler::cursor::PollCursor;
use crate::service::Notifier;

/// Result of a single poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status message was produced and handed to the notifier
    Notified { delivered: bool },
    /// The API reported no homeworks in the window
    NoChanges,
    /// A stage failed and a failure message was handed to the notifier
    Failed { delivered: bool },
}

/// Poller that checks homework statuses once per interval
pub struct StatusPoller {
    config: Config,
    repository: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    cursor: PollCursor,
}

impl StatusPoller {
    /// Creates a new poller with an unset cursor
    pub fn new(
        config: Config,
        repository: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            repository,
            notifier,
            clock,
            cursor: PollCursor::new(),
        }
    }

    /// Current poll window cursor
    #[allow(dead_code)]
    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    /// Starts the polling loop; it never returns
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.retry_interval
        );

        loop {
            self.tick().await;
        }
    }

    /// Runs one cycle, then advances the cursor and waits out the interval
    ///
    /// The cursor moves and the sleep happens whatever the cycle outcome.
    pub async fn tick(&mut self) -> CycleOutcome {
        let outcome = self.run_cycle().await;

        match outcome {
            CycleOutcome::Notified { delivered: true } => info!("Status change reported"),
            CycleOutcome::NoChanges => debug!("No status changes"),
            CycleOutcome::Notified { delivered: false } | CycleOutcome::Failed { .. } => {
                warn!("Cycle finished with errors: {:?}", outcome)
            }
        }

        self.cursor.advance(self.clock.now());
        debug!(
            "Next poll from {:?} in {:?}",
            self.cursor.last(),
            self.config.retry_interval
        );

        self.clock.sleep(self.config.retry_interval).await;
        outcome
    }

    /// Performs a single poll cycle without sleeping
    pub async fn run_cycle(&self) -> CycleOutcome {
        let since = self.cursor.since(self.clock.now());
        debug!("Polling homework statuses since {}", since);

        match self.check_for_update(since).await {
            Ok(Some(message)) => CycleOutcome::Notified {
                delivered: self.notify(&message).await,
            },
            Ok(None) => CycleOutcome::NoChanges,
            Err(e) => {
                error!("Poll cycle failed: {}", e);
                CycleOutcome::Failed {
                    delivered: self.notify(&e.notification()).await,
                }
            }
        }
    }

    /// Fetches, validates and formats; any stage error ends the cycle
    async fn check_for_update(&self, since: i64) -> Result<Option<String>, CycleError> {
        let raw = self.repository.fetch_statuses(since).await?;

        let Some(record) = validate_response(&raw)? else {
            return Ok(None);
        };
        debug!("Latest homework: {:?}", record);

        Ok(Some(format_status(&record)?))
    }

    /// Hands a message to the notifier; failures are only logged
    async fn notify(&self, message: &str) -> bool {
        match self.notifier.deliver(message).await {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }
}
