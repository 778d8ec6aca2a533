//! Core types for the page cache

use crate::error::GenerationError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A generated page held in the cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedPage {
    pub path: String,
    pub html: String,
    pub generated_at: DateTime<Utc>,
}

impl CachedPage {
    pub fn new(path: impl Into<String>, html: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            path: path.into(),
            html: html.into(),
            generated_at,
        }
    }

    /// Whether the page is older than `lifetime` at `now`
    pub fn is_stale(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        now - self.generated_at > lifetime
    }
}

/// Limits applied by the controller, fixed for its lifetime
#[derive(Debug, Clone, Copy)]
pub struct CacheSettings {
    pub cache_lifetime: Duration,
    pub max_pages_per_day: u64,
}

impl CacheSettings {
    pub fn from_secs(cache_lifetime_secs: u64, max_pages_per_day: u64) -> Self {
        let secs = i64::try_from(cache_lifetime_secs).unwrap_or(i64::MAX);
        Self {
            cache_lifetime: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
            max_pages_per_day,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self::from_secs(24 * 60 * 60, 100)
    }
}

/// Result of resolving a single path
#[derive(Debug)]
pub enum Outcome {
    /// A cached page was served without generating
    ServeCached(String),
    /// Nothing cached and the daily quota is used up
    QuotaExceeded,
    /// A fresh page was generated and stored
    Generated(String),
    /// The generator failed; the quota slot stays consumed
    GenerationFailed(GenerationError),
}

impl Outcome {
    pub fn is_cache_hit(&self) -> bool {
        matches!(self, Outcome::ServeCached(_))
    }
}

/// Point-in-time view of the quota window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaSnapshot {
    pub used: u64,
    pub limit: u64,
    pub window_start: DateTime<Utc>,
    pub resets_after: DateTime<Utc>,
}

/// Counters collected by the controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ControllerStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub generated: u64,
    pub failures: u64,
    pub quota_rejections: u64,
}
