//! Filesystem key-value backend.
//!
//! Stores each key as one file under a directory (`<dir>/<key>.kv`), written
//! through [`AtomicFile`]. This is the platform store the
//! [`robota_core::KeyValueStore`] adapter wraps on desktop targets; any error
//! surfaced here is absorbed by the adapter.

use crate::paths::RobotaPaths;
use crate::storage::{AtomicFile, AtomicFileError};
use robota_core::storage::{KeyValueBackend, StorageError};
use std::path::PathBuf;

/// Key-value backend persisting to one file per key.
pub struct FsKeyValueBackend {
    dir: PathBuf,
}

impl FsKeyValueBackend {
    /// Creates a backend rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Creates a backend rooted at the default platform location.
    pub fn at_default_location() -> Result<Self, StorageError> {
        let dir = RobotaPaths::kv_dir()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(Self::new(dir))
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile, StorageError> {
        // Keys name storage slots, not paths; anything else is a programming
        // error upstream.
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Io(format!("invalid storage key: {key:?}")));
        }
        Ok(AtomicFile::new(self.dir.join(format!("{key}.kv"))))
    }
}

impl KeyValueBackend for FsKeyValueBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.file_for(key)?.load().map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.file_for(key)?.save(value).map_err(storage_error)
    }
}

fn storage_error(err: AtomicFileError) -> StorageError {
    StorageError::Io(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use robota_core::KeyValueStore;
    use robota_core::favorites::FavoritesStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FsKeyValueBackend::new(temp_dir.path().to_path_buf());

        backend.set("themeMode", "dark").unwrap();
        assert_eq!(backend.get("themeMode").unwrap(), Some("dark".to_string()));
        assert_eq!(backend.get("language").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FsKeyValueBackend::new(temp_dir.path().to_path_buf());

        assert!(backend.set("../escape", "x").is_err());
        assert!(backend.set("a/b", "x").is_err());
        assert!(backend.set("", "x").is_err());
    }

    #[test]
    fn test_backs_a_store_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();

        {
            let backend = Arc::new(FsKeyValueBackend::new(dir.clone()));
            let favorites = FavoritesStore::new(KeyValueStore::new(backend));
            favorites.add("job-5");
        }

        let backend = Arc::new(FsKeyValueBackend::new(dir));
        let favorites = FavoritesStore::new(KeyValueStore::new(backend));
        assert!(favorites.is_favorite("job-5"));
    }
}
