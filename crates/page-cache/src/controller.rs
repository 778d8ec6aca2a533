//! Request controller: decides between serving, regenerating and refusing

use crate::generator::PageGenerator;
use crate::quota::QuotaState;
use crate::store::PageStore;
use crate::types::{CacheSettings, CachedPage, ControllerStats, Outcome, QuotaSnapshot};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Resolves paths against the cache, the quota and the generator
///
/// The quota lock is held from the window check through the slot
/// reservation, so concurrent requests can never push the counter past the
/// limit. The generator runs after the lock is released.
pub struct PageController {
    settings: CacheSettings,
    store: PageStore,
    quota: Mutex<QuotaState>,
    generator: Arc<dyn PageGenerator>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    generated: AtomicU64,
    failures: AtomicU64,
    quota_rejections: AtomicU64,
}

impl PageController {
    /// Create a controller whose first quota window starts now
    pub fn new(settings: CacheSettings, generator: Arc<dyn PageGenerator>) -> Self {
        Self::with_window_start(settings, generator, Utc::now())
    }

    pub fn with_window_start(
        settings: CacheSettings,
        generator: Arc<dyn PageGenerator>,
        window_start: DateTime<Utc>,
    ) -> Self {
        Self {
            settings,
            store: PageStore::new(),
            quota: Mutex::new(QuotaState::new(settings.max_pages_per_day, window_start)),
            generator,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            generated: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            quota_rejections: AtomicU64::new(0),
        }
    }

    pub fn settings(&self) -> &CacheSettings {
        &self.settings
    }

    /// Resolve `path` at `now`
    pub async fn handle(&self, path: &str, now: DateTime<Utc>) -> Outcome {
        {
            let mut quota = self.quota.lock().await;
            Self::roll(&mut quota, now);

            if let Some(page) = self.store.get(path).await {
                // Stale pages are only dropped when they can be replaced.
                if quota.has_capacity() && page.is_stale(now, self.settings.cache_lifetime) {
                    self.store.delete(path).await;
                    self.evictions.fetch_add(1, Ordering::Relaxed);
                    info!(path, generated_at = %page.generated_at, "Evicted stale page");
                } else {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    debug!(path, "Serving cached page");
                    return Outcome::ServeCached(page.html);
                }
            }
            self.misses.fetch_add(1, Ordering::Relaxed);

            if !quota.has_capacity() {
                self.quota_rejections.fetch_add(1, Ordering::Relaxed);
                debug!(path, used = quota.count(), "Generation quota exhausted");
                return Outcome::QuotaExceeded;
            }
            quota.reserve();
        }

        match self.generator.generate(path).await {
            Ok(html) => {
                // An overlapping request for the same path may have stored a newer page.
                if !self
                    .store
                    .put_if_newer(CachedPage::new(path, html.clone(), now))
                    .await
                {
                    debug!(path, "Kept newer page generated concurrently");
                }
                self.generated.fetch_add(1, Ordering::Relaxed);
                debug!(path, size = html.len(), "Generated page");
                Outcome::Generated(html)
            }
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!(path, error = %e, "Page generation failed");
                Outcome::GenerationFailed(e)
            }
        }
    }

    /// Resolve `path` against the wall clock
    pub async fn handle_now(&self, path: &str) -> Outcome {
        self.handle(path, Utc::now()).await
    }

    /// Advance the quota window without resolving anything.
    /// Returns true when the counter was reset.
    pub async fn roll_window(&self, now: DateTime<Utc>) -> bool {
        let mut quota = self.quota.lock().await;
        Self::roll(&mut quota, now)
    }

    fn roll(quota: &mut QuotaState, now: DateTime<Utc>) -> bool {
        let previous = quota.count();
        let reset = quota.roll(now);
        if reset {
            info!(previous, window_start = %now, "Reset generated page count");
        }
        reset
    }

    /// Every cached page, for listing
    pub async fn pages(&self) -> Vec<CachedPage> {
        self.store.list().await
    }

    pub async fn quota(&self) -> QuotaSnapshot {
        self.quota.lock().await.snapshot()
    }

    pub async fn stats(&self) -> ControllerStats {
        ControllerStats {
            entries: self.store.len().await,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            generated: self.generated.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            quota_rejections: self.quota_rejections.load(Ordering::Relaxed),
        }
    }
}
