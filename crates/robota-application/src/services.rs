//! Composition root.
//!
//! Builds every store exactly once over one shared [`KeyValueStore`] and
//! hands them out behind `Arc`s. Screens receive this struct (or clones of
//! the members they need) instead of reaching for globals, which keeps tests
//! free to construct isolated instances.

use robota_core::applications::ApplicationsStore;
use robota_core::conversation::ConversationStore;
use robota_core::favorites::FavoritesStore;
use robota_core::job::JobCatalog;
use robota_core::preferences::PreferencesStore;
use robota_core::recent_searches::RecentSearchStore;
use robota_core::settings::SettingsStore;
use robota_core::storage::{KeyValueBackend, KeyValueStore};
use robota_core::user::AuthStore;
use robota_infrastructure::{FsKeyValueBackend, MockJobCatalog};
use std::sync::Arc;

/// All application stores plus the job catalog.
pub struct AppServices {
    pub favorites: Arc<FavoritesStore>,
    pub applications: Arc<ApplicationsStore>,
    pub recent_searches: Arc<RecentSearchStore>,
    pub preferences: Arc<PreferencesStore>,
    pub settings: Arc<SettingsStore>,
    pub auth: Arc<AuthStore>,
    pub conversations: Arc<ConversationStore>,
    pub jobs: Arc<dyn JobCatalog>,
}

impl AppServices {
    /// Wires every store over the given backend and catalog.
    pub fn new(backend: Arc<dyn KeyValueBackend>, jobs: Arc<dyn JobCatalog>) -> Self {
        let storage = KeyValueStore::new(backend);
        Self {
            favorites: Arc::new(FavoritesStore::new(storage.clone())),
            applications: Arc::new(ApplicationsStore::new(storage.clone())),
            recent_searches: Arc::new(RecentSearchStore::new(storage.clone())),
            preferences: Arc::new(PreferencesStore::new(storage.clone())),
            settings: Arc::new(SettingsStore::new(storage.clone())),
            auth: Arc::new(AuthStore::new()),
            conversations: Arc::new(ConversationStore::new(storage)),
            jobs,
        }
    }

    /// Production wiring: filesystem persistence at the default location and
    /// the demo catalog.
    pub fn with_default_backend() -> Self {
        let backend: Arc<dyn KeyValueBackend> = match FsKeyValueBackend::at_default_location() {
            Ok(backend) => Arc::new(backend),
            Err(err) => {
                tracing::warn!(%err, "no data directory available, state will not persist");
                Arc::new(robota_core::MemoryBackend::new())
            }
        };
        Self::new(backend, Arc::new(MockJobCatalog::new()))
    }

    /// Fully in-memory wiring with an instant catalog, for tests.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(robota_core::MemoryBackend::new()),
            Arc::new(MockJobCatalog::instant()),
        )
    }
}
