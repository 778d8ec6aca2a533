//! Global generation quota with a lazily rolled 24 hour window

use crate::types::QuotaSnapshot;
use chrono::{DateTime, Duration, Utc};

/// Length of a counting window
pub const QUOTA_WINDOW_HOURS: i64 = 24;

/// Number of generations attempted since `window_start`
///
/// There is no background timer: the window only moves when [`roll`](Self::roll)
/// is called, which the controller does at the start of every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaState {
    count: u64,
    limit: u64,
    window_start: DateTime<Utc>,
}

impl QuotaState {
    pub fn new(limit: u64, window_start: DateTime<Utc>) -> Self {
        Self {
            count: 0,
            limit,
            window_start,
        }
    }

    fn window() -> Duration {
        Duration::hours(QUOTA_WINDOW_HOURS)
    }

    /// Start a new window at `now` if the current one has run out.
    /// Returns true when the counter was reset.
    pub fn roll(&mut self, now: DateTime<Utc>) -> bool {
        if now - self.window_start > Self::window() {
            self.count = 0;
            self.window_start = now;
            true
        } else {
            false
        }
    }

    pub fn has_capacity(&self) -> bool {
        self.count < self.limit
    }

    /// Take one slot. Callers check [`has_capacity`](Self::has_capacity) first
    /// while holding the same lock.
    pub fn reserve(&mut self) {
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn window_start(&self) -> DateTime<Utc> {
        self.window_start
    }

    pub fn snapshot(&self) -> QuotaSnapshot {
        QuotaSnapshot {
            used: self.count,
            limit: self.limit,
            window_start: self.window_start,
            resets_after: self.window_start + Self::window(),
        }
    }
}
