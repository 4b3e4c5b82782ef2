//! App-wide display settings.
//!
//! Theme mode and interface language are persisted as plain strings (not
//! JSON) under their own keys, matching the snapshot layout the mobile client
//! established. Unrecognized persisted values fall back to the default.

use crate::storage::KeyValueStore;
use crate::store::{SubscriberSet, Subscription};
use std::str::FromStr;
use std::sync::RwLock;
use strum_macros::{Display, EnumString};

const THEME_MODE_KEY: &str = "themeMode";
const LANGUAGE_KEY: &str = "language";

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Uk,
    En,
}

/// Snapshot of the display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppSettings {
    pub theme_mode: ThemeMode,
    pub language: Language,
}

/// Store for theme mode and language.
pub struct SettingsStore {
    state: RwLock<AppSettings>,
    subscribers: SubscriberSet<AppSettings>,
    storage: KeyValueStore,
}

impl SettingsStore {
    /// Creates the store, loading both keys and defaulting anything
    /// unreadable.
    pub fn new(storage: KeyValueStore) -> Self {
        let theme_mode = storage
            .get_string(THEME_MODE_KEY)
            .and_then(|value| ThemeMode::from_str(&value).ok())
            .unwrap_or_default();
        let language = storage
            .get_string(LANGUAGE_KEY)
            .and_then(|value| Language::from_str(&value).ok())
            .unwrap_or_default();

        Self {
            state: RwLock::new(AppSettings {
                theme_mode,
                language,
            }),
            subscribers: SubscriberSet::new(),
            storage,
        }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> AppSettings {
        *self.state.read().unwrap()
    }

    /// Registers a listener, invoking it once with the current snapshot.
    pub fn subscribe(
        &self,
        listener: impl Fn(&AppSettings) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribers.subscribe_with(listener, &self.settings())
    }

    /// Switches the color theme.
    pub fn set_theme_mode(&self, theme_mode: ThemeMode) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.theme_mode = theme_mode;
            *state
        };
        self.storage
            .set_string(THEME_MODE_KEY, &theme_mode.to_string());
        self.subscribers.notify(&snapshot);
    }

    /// Switches the interface language.
    pub fn set_language(&self, language: Language) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.language = language;
            *state
        };
        self.storage.set_string(LANGUAGE_KEY, &language.to_string());
        self.subscribers.notify(&snapshot);
    }
}
