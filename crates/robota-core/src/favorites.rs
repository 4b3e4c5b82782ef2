//! Saved-jobs store.
//!
//! Holds the set of job ids the user has bookmarked. Insertion order is
//! preserved for display, but membership is set-like: adding an id twice is a
//! no-op.

use crate::storage::KeyValueStore;
use crate::store::{SubscriberSet, Subscription};
use std::sync::RwLock;

const FAVORITES_KEY: &str = "favorites";

/// Store for the user's saved job ids.
pub struct FavoritesStore {
    state: RwLock<Vec<String>>,
    subscribers: SubscriberSet<Vec<String>>,
    storage: KeyValueStore,
}

impl FavoritesStore {
    /// Creates the store, loading the persisted set (empty by default).
    pub fn new(storage: KeyValueStore) -> Self {
        let initial = storage.get_json(FAVORITES_KEY, Vec::new());
        Self {
            state: RwLock::new(initial),
            subscribers: SubscriberSet::new(),
            storage,
        }
    }

    /// Current snapshot of saved job ids, in insertion order.
    pub fn favorites(&self) -> Vec<String> {
        self.state.read().unwrap().clone()
    }

    /// Whether `job_id` is currently saved.
    pub fn is_favorite(&self, job_id: &str) -> bool {
        self.state.read().unwrap().iter().any(|id| id == job_id)
    }

    /// Registers a listener, invoking it once with the current snapshot.
    pub fn subscribe(&self, listener: impl Fn(&Vec<String>) + Send + Sync + 'static) -> Subscription {
        self.subscribers.subscribe_with(listener, &self.favorites())
    }

    /// Saves `job_id`. No-op if it is already saved.
    pub fn add(&self, job_id: &str) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            if state.iter().any(|id| id == job_id) {
                return;
            }
            state.push(job_id.to_string());
            state.clone()
        };
        self.commit(snapshot);
    }

    /// Removes `job_id` from the saved set. No-op if absent.
    pub fn remove(&self, job_id: &str) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            let before = state.len();
            state.retain(|id| id != job_id);
            if state.len() == before {
                return;
            }
            state.clone()
        };
        self.commit(snapshot);
    }

    /// Adds `job_id` if absent, removes it otherwise.
    pub fn toggle(&self, job_id: &str) {
        if self.is_favorite(job_id) {
            self.remove(job_id);
        } else {
            self.add(job_id);
        }
    }

    /// Empties the saved set.
    pub fn clear(&self) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.clear();
            state.clone()
        };
        self.commit(snapshot);
    }

    fn commit(&self, snapshot: Vec<String>) {
        self.storage.set_json(FAVORITES_KEY, &snapshot);
        self.subscribers.notify(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn store() -> FavoritesStore {
        FavoritesStore::new(KeyValueStore::in_memory())
    }

    #[test]
    fn test_add_is_idempotent() {
        let favorites = store();
        favorites.add("job-1");
        favorites.add("job-1");

        assert_eq!(favorites.favorites(), vec!["job-1".to_string()]);
        assert!(favorites.is_favorite("job-1"));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let favorites = store();
        favorites.add("job-1");

        favorites.toggle("job-2");
        favorites.toggle("job-2");

        assert_eq!(favorites.favorites(), vec!["job-1".to_string()]);
        assert!(!favorites.is_favorite("job-2"));
    }

    #[test]
    fn test_remove_and_clear() {
        let favorites = store();
        favorites.add("job-1");
        favorites.add("job-2");

        favorites.remove("job-1");
        assert_eq!(favorites.favorites(), vec!["job-2".to_string()]);

        favorites.clear();
        assert!(favorites.favorites().is_empty());
    }

    #[test]
    fn test_persists_through_reload() {
        let storage = KeyValueStore::in_memory();
        {
            let favorites = FavoritesStore::new(storage.clone());
            favorites.add("job-5");
        }

        let reloaded = FavoritesStore::new(storage);
        assert!(reloaded.is_favorite("job-5"));
    }

    #[test]
    fn test_subscribe_receives_current_and_updates() {
        let favorites = store();
        favorites.add("job-1");

        let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let _subscription = favorites.subscribe(move |snapshot| {
            seen_clone.lock().unwrap().push(snapshot.clone());
        });

        favorites.add("job-2");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], vec!["job-1".to_string()]);
        assert_eq!(
            seen[1],
            vec!["job-1".to_string(), "job-2".to_string()]
        );
    }
}
