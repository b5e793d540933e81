//! Poll window cursor

/// Lower bound of the next poll window
///
/// Unset until the first cycle completes; lives only in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollCursor {
    last: Option<i64>,
}

impl PollCursor {
    /// Creates an unset cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the last completed cycle, if any
    pub fn last(&self) -> Option<i64> {
        self.last
    }

    /// Start of the window to poll, falling back to `now` when unset
    pub fn since(&self, now: i64) -> i64 {
        self.last.unwrap_or(now)
    }

    /// Moves the cursor to `now`; never moves it backwards
    pub fn advance(&mut self, now: i64) {
        self.last = Some(self.last.map_or(now, |last| last.max(now)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_cursor_uses_now() {
        let cursor = PollCursor::new();
        assert_eq!(cursor.last(), None);
        assert_eq!(cursor.since(1_700_000_000), 1_700_000_000);
    }

    #[test]
    fn test_advance_sets_window_start() {
        let mut cursor = PollCursor::new();
        cursor.advance(100);
        assert_eq!(cursor.since(250), 100);
        cursor.advance(250);
        assert_eq!(cursor.since(900), 250);
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut cursor = PollCursor::new();
        cursor.advance(500);
        cursor.advance(400);
        assert_eq!(cursor.last(), Some(500));
    }
}
