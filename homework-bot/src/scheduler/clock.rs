//! Time source for the poll loop
//!
//! The poller never reads the wall clock or sleeps directly, so tests can
//! drive many cycles instantly with a manual clock.

use async_trait::async_trait;
use std::time::Duration;

/// Source of the current time and of the pause between cycles
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in seconds
    fn now(&self) -> i64;

    /// Suspends the caller for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Wall clock backed by chrono and the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        // 2024-01-01T00:00:00Z
        assert!(SystemClock.now() > 1_704_067_200);
    }

    #[tokio::test(start_paused = true)]
    async fn test_system_clock_sleep_uses_tokio_timer() {
        let started = tokio::time::Instant::now();
        SystemClock.sleep(Duration::from_secs(600)).await;
        assert!(started.elapsed() >= Duration::from_secs(600));
    }
}
