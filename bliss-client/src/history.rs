//! Recently viewed products and recent searches
//!
//! Both lists are most-recent-first, de-duplicated and bounded.

use std::sync::Arc;

use crate::error::ClientResult;
use crate::storage::KeyValueStore;

pub const VIEW_HISTORY_KEY: &str = "viewHistory";
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";

const DEFAULT_VIEW_LIMIT: usize = 10;
const DEFAULT_SEARCH_LIMIT: usize = 20;

pub struct HistoryCache {
    store: Arc<dyn KeyValueStore>,
    view_limit: usize,
    search_limit: usize,
}

impl HistoryCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            view_limit: DEFAULT_VIEW_LIMIT,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_limits(mut self, views: usize, searches: usize) -> Self {
        self.view_limit = views;
        self.search_limit = searches;
        self
    }

    pub fn record_view(&self, product_id: &str) -> ClientResult<()> {
        let product_id = product_id.trim();
        if product_id.is_empty() {
            return Ok(());
        }
        self.push(VIEW_HISTORY_KEY, product_id, self.view_limit, |a, b| a == b)
    }

    /// Queries differing only in case count as the same search
    pub fn record_search(&self, query: &str) -> ClientResult<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }
        self.push(SEARCH_HISTORY_KEY, query, self.search_limit, |a, b| {
            a.to_lowercase() == b.to_lowercase()
        })
    }

    pub fn recent_views(&self) -> Vec<String> {
        self.load(VIEW_HISTORY_KEY)
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.load(SEARCH_HISTORY_KEY)
    }

    pub fn clear(&self) -> ClientResult<()> {
        self.store.remove(VIEW_HISTORY_KEY)?;
        self.store.remove(SEARCH_HISTORY_KEY)
    }

    fn push(
        &self,
        key: &str,
        entry: &str,
        limit: usize,
        same: impl Fn(&str, &str) -> bool,
    ) -> ClientResult<()> {
        let mut entries = self.load(key);
        entries.retain(|existing| !same(existing, entry));
        entries.insert(0, entry.to_string());
        entries.truncate(limit);
        self.store.set(key, &serde_json::to_string(&entries)?)
    }

    fn load(&self, key: &str) -> Vec<String> {
        let Some(raw) = self.store.get(key) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, "Discarding unreadable history: {}", e);
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn cache() -> HistoryCache {
        HistoryCache::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_views_most_recent_first_without_duplicates() {
        let history = cache();
        history.record_view("p1").unwrap();
        history.record_view("p2").unwrap();
        history.record_view("p1").unwrap();
        assert_eq!(history.recent_views(), vec!["p1", "p2"]);
    }

    #[test]
    fn test_limits() {
        let history = cache().with_limits(2, 2);
        for id in ["a", "b", "c"] {
            history.record_view(id).unwrap();
        }
        assert_eq!(history.recent_views(), vec!["c", "b"]);
    }

    #[test]
    fn test_search_ignores_blank_and_case() {
        let history = cache();
        history.record_search("  ").unwrap();
        history.record_search("Nến thơm").unwrap();
        history.record_search("sáp ong").unwrap();
        history.record_search("nến thơm ").unwrap();
        assert_eq!(history.recent_searches(), vec!["nến thơm", "sáp ong"]);
    }

    #[test]
    fn test_clear() {
        let history = cache();
        history.record_view("p1").unwrap();
        history.record_search("quà tặng").unwrap();
        history.clear().unwrap();
        assert!(history.recent_views().is_empty());
        assert!(history.recent_searches().is_empty());
    }
}
