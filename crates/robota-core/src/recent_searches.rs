//! Recent-search history store.
//!
//! Remembers the last few query/location pairs the user searched for.
//! Entries are deduplicated by exact (query, location) pair; re-adding an
//! existing pair moves it to the front. The list is capped, dropping the
//! oldest entries past the limit.

use crate::storage::KeyValueStore;
use crate::store::{SubscriberSet, Subscription};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Default history length.
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// A remembered search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSearch {
    /// Free-text query, absent when the user searched by location only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Location filter, absent when the user searched by query only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
}

impl RecentSearch {
    fn same_search(&self, other: &RecentSearch) -> bool {
        self.query.as_deref().unwrap_or("") == other.query.as_deref().unwrap_or("")
            && self.location.as_deref().unwrap_or("") == other.location.as_deref().unwrap_or("")
    }
}

/// Store for the bounded search history.
pub struct RecentSearchStore {
    state: RwLock<Vec<RecentSearch>>,
    subscribers: SubscriberSet<Vec<RecentSearch>>,
    storage: KeyValueStore,
    limit: usize,
}

impl RecentSearchStore {
    /// Creates the store with the default history length.
    pub fn new(storage: KeyValueStore) -> Self {
        Self::with_limit(storage, DEFAULT_RECENT_LIMIT)
    }

    /// Creates the store with a custom history length.
    pub fn with_limit(storage: KeyValueStore, limit: usize) -> Self {
        let initial = storage.get_json(RECENT_SEARCHES_KEY, Vec::new());
        Self {
            state: RwLock::new(initial),
            subscribers: SubscriberSet::new(),
            storage,
            limit,
        }
    }

    /// Current snapshot, most recent search first.
    pub fn recent_searches(&self) -> Vec<RecentSearch> {
        self.state.read().unwrap().clone()
    }

    /// Registers a listener, invoking it once with the current snapshot.
    pub fn subscribe(
        &self,
        listener: impl Fn(&Vec<RecentSearch>) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribers
            .subscribe_with(listener, &self.recent_searches())
    }

    /// Remembers a search.
    ///
    /// Both parts are trimmed; if nothing remains the call is a no-op. An
    /// entry equal to an existing one moves to the front instead of
    /// duplicating it, and the list is truncated to the configured limit.
    pub fn add_search(&self, query: &str, location: &str) {
        let query = query.trim();
        let location = location.trim();
        if query.is_empty() && location.is_empty() {
            return;
        }

        let entry = RecentSearch {
            query: (!query.is_empty()).then(|| query.to_string()),
            location: (!location.is_empty()).then(|| location.to_string()),
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.retain(|existing| !existing.same_search(&entry));
            state.insert(0, entry);
            state.truncate(self.limit);
            state.clone()
        };
        self.commit(snapshot);
    }

    /// Forgets the whole history.
    pub fn clear(&self) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.clear();
            state.clone()
        };
        self.commit(snapshot);
    }

    fn commit(&self, snapshot: Vec<RecentSearch>) {
        self.storage.set_json(RECENT_SEARCHES_KEY, &snapshot);
        self.subscribers.notify(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecentSearchStore {
        RecentSearchStore::new(KeyValueStore::in_memory())
    }

    fn queries(store: &RecentSearchStore) -> Vec<Option<String>> {
        store
            .recent_searches()
            .into_iter()
            .map(|entry| entry.query)
            .collect()
    }

    #[test]
    fn test_blank_search_is_noop() {
        let searches = store();
        searches.add_search("   ", "");
        assert!(searches.recent_searches().is_empty());
    }

    #[test]
    fn test_trims_and_drops_empty_parts() {
        let searches = store();
        searches.add_search("  react  ", "");

        let snapshot = searches.recent_searches();
        assert_eq!(snapshot[0].query.as_deref(), Some("react"));
        assert_eq!(snapshot[0].location, None);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let searches = store();
        searches.add_search("a", "");
        searches.add_search("b", "");
        searches.add_search("a", "");

        assert_eq!(
            queries(&searches),
            vec![Some("a".to_string()), Some("b".to_string())]
        );
    }

    #[test]
    fn test_dedup_distinguishes_locations() {
        let searches = store();
        searches.add_search("react", "Київ");
        searches.add_search("react", "Львів");

        assert_eq!(searches.recent_searches().len(), 2);
    }

    #[test]
    fn test_evicts_oldest_past_limit() {
        let searches = RecentSearchStore::with_limit(KeyValueStore::in_memory(), 3);
        for query in ["a", "b", "c", "d"] {
            searches.add_search(query, "");
        }

        assert_eq!(
            queries(&searches),
            vec![
                Some("d".to_string()),
                Some("c".to_string()),
                Some("b".to_string())
            ]
        );
    }

    #[test]
    fn test_clear_and_reload() {
        let storage = KeyValueStore::in_memory();
        {
            let searches = RecentSearchStore::new(storage.clone());
            searches.add_search("kotlin", "Одеса");
        }

        let reloaded = RecentSearchStore::new(storage.clone());
        assert_eq!(reloaded.recent_searches().len(), 1);

        reloaded.clear();
        let cleared = RecentSearchStore::new(storage);
        assert!(cleared.recent_searches().is_empty());
    }
}
