//! User-preference flags.
//!
//! A fixed-shape bag of booleans. The persisted payload may be partial (older
//! snapshots predate newer flags); missing fields fall back to their defaults
//! on load, so new flags can be added without migrating stored data. Unknown
//! persisted keys are ignored.

use crate::storage::KeyValueStore;
use crate::store::{SubscriberSet, Subscription};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

const USER_PREFERENCES_KEY: &str = "userPreferences";

/// The full preference flag bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Push/in-app notifications toggle.
    pub notifications_enabled: bool,
    /// Dense list layout.
    pub compact_mode: bool,
    /// Shown on the worker profile as "open to work".
    pub open_to_work: bool,
    /// Restrict search results to remote listings.
    pub remote_only_search: bool,
    /// Hide listings the user already applied to.
    pub hide_applied_jobs: bool,
    /// Keep pinned chats at the top of the inbox.
    pub pin_important_chats: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            compact_mode: false,
            open_to_work: true,
            remote_only_search: false,
            hide_applied_jobs: false,
            pin_important_chats: true,
        }
    }
}

/// Addressable preference flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceFlag {
    NotificationsEnabled,
    CompactMode,
    OpenToWork,
    RemoteOnlySearch,
    HideAppliedJobs,
    PinImportantChats,
}

impl UserPreferences {
    /// Reads a flag by name.
    pub fn get(&self, flag: PreferenceFlag) -> bool {
        match flag {
            PreferenceFlag::NotificationsEnabled => self.notifications_enabled,
            PreferenceFlag::CompactMode => self.compact_mode,
            PreferenceFlag::OpenToWork => self.open_to_work,
            PreferenceFlag::RemoteOnlySearch => self.remote_only_search,
            PreferenceFlag::HideAppliedJobs => self.hide_applied_jobs,
            PreferenceFlag::PinImportantChats => self.pin_important_chats,
        }
    }

    fn set(&mut self, flag: PreferenceFlag, value: bool) {
        match flag {
            PreferenceFlag::NotificationsEnabled => self.notifications_enabled = value,
            PreferenceFlag::CompactMode => self.compact_mode = value,
            PreferenceFlag::OpenToWork => self.open_to_work = value,
            PreferenceFlag::RemoteOnlySearch => self.remote_only_search = value,
            PreferenceFlag::HideAppliedJobs => self.hide_applied_jobs = value,
            PreferenceFlag::PinImportantChats => self.pin_important_chats = value,
        }
    }
}

/// Store for the preference flags.
pub struct PreferencesStore {
    state: RwLock<UserPreferences>,
    subscribers: SubscriberSet<UserPreferences>,
    storage: KeyValueStore,
}

impl PreferencesStore {
    /// Creates the store, merging the persisted partial object over the
    /// defaults.
    pub fn new(storage: KeyValueStore) -> Self {
        let initial = storage.get_json(USER_PREFERENCES_KEY, UserPreferences::default());
        Self {
            state: RwLock::new(initial),
            subscribers: SubscriberSet::new(),
            storage,
        }
    }

    /// Current snapshot of all flags.
    pub fn preferences(&self) -> UserPreferences {
        self.state.read().unwrap().clone()
    }

    /// Registers a listener, invoking it once with the current snapshot.
    pub fn subscribe(
        &self,
        listener: impl Fn(&UserPreferences) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribers
            .subscribe_with(listener, &self.preferences())
    }

    /// Sets one flag, leaving the rest untouched.
    pub fn set_preference(&self, flag: PreferenceFlag, value: bool) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.set(flag, value);
            state.clone()
        };
        self.storage.set_json(USER_PREFERENCES_KEY, &snapshot);
        self.subscribers.notify(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let preferences = UserPreferences::default();
        assert!(preferences.notifications_enabled);
        assert!(!preferences.compact_mode);
        assert!(preferences.open_to_work);
        assert!(!preferences.remote_only_search);
        assert!(!preferences.hide_applied_jobs);
        assert!(preferences.pin_important_chats);
    }

    #[test]
    fn test_partial_payload_merges_over_defaults() {
        let storage = KeyValueStore::in_memory();
        storage.set_string(USER_PREFERENCES_KEY, r#"{"compactMode":true}"#);

        let store = PreferencesStore::new(storage);
        let preferences = store.preferences();
        assert!(preferences.compact_mode);
        // Everything else stays at its default.
        assert!(preferences.notifications_enabled);
        assert!(preferences.open_to_work);
        assert!(!preferences.remote_only_search);
    }

    #[test]
    fn test_unknown_persisted_keys_are_ignored() {
        let storage = KeyValueStore::in_memory();
        storage.set_string(
            USER_PREFERENCES_KEY,
            r#"{"compactMode":true,"retiredFlag":false}"#,
        );

        let store = PreferencesStore::new(storage);
        assert!(store.preferences().compact_mode);
    }

    #[test]
    fn test_set_preference_persists_and_notifies() {
        let storage = KeyValueStore::in_memory();
        let store = PreferencesStore::new(storage.clone());

        store.set_preference(PreferenceFlag::RemoteOnlySearch, true);
        assert!(store.preferences().remote_only_search);

        let reloaded = PreferencesStore::new(storage);
        assert!(reloaded.preferences().remote_only_search);
    }

    #[test]
    fn test_get_by_flag() {
        let preferences = UserPreferences::default();
        assert!(preferences.get(PreferenceFlag::PinImportantChats));
        assert!(!preferences.get(PreferenceFlag::HideAppliedJobs));
    }
}
