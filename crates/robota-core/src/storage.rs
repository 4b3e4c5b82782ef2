//! Best-effort key-value persistence.
//!
//! Every store persists its snapshot as a string value under a well-known
//! key. The backend is platform-provided and may be missing or broken at any
//! moment; [`KeyValueStore`] absorbs every backend failure into an in-process
//! fallback map so store code never observes a storage error. State held only
//! by the fallback map is lost on process restart, which is acceptable for
//! this layer.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors produced by key-value backends.
///
/// These stay internal to the persistence layer: [`KeyValueStore`] downgrades
/// them to fallback reads and writes, so the store-facing API is total.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The platform store is not present in this environment.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The platform store exists but a read or write failed.
    #[error("storage I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// A platform string key-value store.
///
/// Implementations are expected to be cheap to call and may fail freely;
/// callers go through [`KeyValueStore`] which handles every failure mode.
pub trait KeyValueBackend: Send + Sync {
    /// Reads the value stored under `key`, `None` if never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process backend backed by a plain map.
///
/// Used as the default backend in tests and as a stand-in when no platform
/// store is wired up.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Total adapter over a [`KeyValueBackend`].
///
/// Writes that fail land in an in-process fallback map; reads that fail are
/// served from the same map. Corrupt JSON payloads deserialize to the
/// caller-supplied fallback value. None of the methods here can fail.
#[derive(Clone)]
pub struct KeyValueStore {
    backend: Arc<dyn KeyValueBackend>,
    fallback: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore {
    /// Creates an adapter over the given backend.
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self {
            backend,
            fallback: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates an adapter backed only by an in-process map.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Best-effort write of a plain string value.
    pub fn set_string(&self, key: &str, value: &str) {
        match self.backend.set(key, value) {
            Ok(()) => {}
            Err(err) => {
                tracing::warn!(key, %err, "storage write failed, keeping value in memory");
                self.fallback
                    .lock()
                    .unwrap()
                    .insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Reads a plain string value, `None` if never written.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "storage read failed, serving in-memory value");
                self.fallback.lock().unwrap().get(key).cloned()
            }
        }
    }

    /// Serializes `value` as JSON and delegates to [`Self::set_string`].
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(payload) => self.set_string(key, &payload),
            Err(err) => {
                tracing::warn!(key, %err, "failed to serialize value, skipping write");
            }
        }
    }

    /// Reads and deserializes the JSON value stored under `key`.
    ///
    /// Returns `fallback` when the key was never written or the stored
    /// payload does not deserialize into `T`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(payload) = self.get_string(key) else {
            return fallback;
        };

        match serde_json::from_str(&payload) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "stored payload is not valid JSON, using fallback");
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that fails every operation, simulating a broken platform store.
    struct FailingBackend;

    impl KeyValueBackend for FailingBackend {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("test".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("test".to_string()))
        }
    }

    #[test]
    fn test_string_round_trip() {
        let store = KeyValueStore::in_memory();
        store.set_string("themeMode", "dark");
        assert_eq!(store.get_string("themeMode"), Some("dark".to_string()));
    }

    #[test]
    fn test_get_string_missing_key() {
        let store = KeyValueStore::in_memory();
        assert_eq!(store.get_string("never-written"), None);
    }

    #[test]
    fn test_json_round_trip() {
        let store = KeyValueStore::in_memory();
        let favorites = vec!["job-1".to_string(), "job-2".to_string()];
        store.set_json("favorites", &favorites);

        let loaded: Vec<String> = store.get_json("favorites", Vec::new());
        assert_eq!(loaded, favorites);
    }

    #[test]
    fn test_json_fallback_on_missing_key() {
        let store = KeyValueStore::in_memory();
        let loaded: Vec<String> = store.get_json("favorites", vec!["default".to_string()]);
        assert_eq!(loaded, vec!["default".to_string()]);
    }

    #[test]
    fn test_json_fallback_on_corrupt_payload() {
        let store = KeyValueStore::in_memory();
        store.set_string("favorites", "{not valid json");

        let loaded: Vec<String> = store.get_json("favorites", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_failing_backend_degrades_to_memory() {
        let store = KeyValueStore::new(Arc::new(FailingBackend));

        // Write goes to the fallback map, read is served from it.
        store.set_string("language", "uk");
        assert_eq!(store.get_string("language"), Some("uk".to_string()));

        let applied = vec!["job-9".to_string()];
        store.set_json("applications", &applied);
        let loaded: Vec<String> = store.get_json("applications", Vec::new());
        assert_eq!(loaded, applied);
    }

    #[test]
    fn test_failing_backend_never_panics_on_miss() {
        let store = KeyValueStore::new(Arc::new(FailingBackend));
        assert_eq!(store.get_string("missing"), None);

        let loaded: Vec<String> = store.get_json("missing", vec!["fallback".to_string()]);
        assert_eq!(loaded, vec!["fallback".to_string()]);
    }
}
