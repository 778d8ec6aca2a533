//! Keyed in-memory store of generated pages
//!
//! The store knows nothing about lifetimes or quotas; the controller decides
//! when an entry is stale and removes it explicitly.

use crate::types::CachedPage;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Map from path to its most recently generated page
#[derive(Default)]
pub struct PageStore {
    entries: RwLock<HashMap<String, CachedPage>>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the page for `path`
    pub async fn get(&self, path: &str) -> Option<CachedPage> {
        self.entries.read().await.get(path).cloned()
    }

    /// Insert a page, replacing any existing entry for the same path
    pub async fn put(&self, page: CachedPage) {
        self.entries.write().await.insert(page.path.clone(), page);
    }

    /// Insert a page unless the stored entry for its path was generated later.
    /// Returns false when the page was discarded.
    pub async fn put_if_newer(&self, page: CachedPage) -> bool {
        let mut entries = self.entries.write().await;
        if let Some(existing) = entries.get(&page.path) {
            if existing.generated_at > page.generated_at {
                return false;
            }
        }
        entries.insert(page.path.clone(), page);
        true
    }

    /// Remove the entry for `path`, returning it if there was one
    pub async fn delete(&self, path: &str) -> Option<CachedPage> {
        self.entries.write().await.remove(path)
    }

    /// Snapshot of every cached page, oldest first
    pub async fn list(&self) -> Vec<CachedPage> {
        let mut pages: Vec<CachedPage> = self.entries.read().await.values().cloned().collect();
        pages.sort_by(|a, b| {
            a.generated_at
                .cmp(&b.generated_at)
                .then_with(|| a.path.cmp(&b.path))
        });
        pages
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
