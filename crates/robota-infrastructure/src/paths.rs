//! Unified path management for Robota data files.
//!
//! All persisted snapshots live under a single per-user data directory so
//! every storage mechanism agrees on the layout.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.local/share/robota/       # Data directory (platform equivalent)
//! └── kv/                      # Key-value snapshots, one file per key
//!     ├── favorites.kv
//!     ├── applications.kv
//!     └── conversationsState.kv
//! ```

use std::path::PathBuf;

/// Environment variable overriding the data directory, mainly for tests and
/// portable installs.
pub const DATA_DIR_ENV: &str = "ROBOTA_DATA_DIR";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DataDirNotFound => write!(f, "Cannot find a data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Robota.
pub struct RobotaPaths;

impl RobotaPaths {
    /// Returns the Robota data directory.
    ///
    /// Honors [`DATA_DIR_ENV`] when set; otherwise resolves the platform
    /// data directory (e.g. `~/.local/share/robota/` on Linux).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        dirs::data_dir()
            .map(|dir| dir.join("robota"))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the directory holding key-value snapshot files.
    pub fn kv_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("kv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kv_dir_is_under_data_dir() {
        let data_dir = RobotaPaths::data_dir().unwrap();
        let kv_dir = RobotaPaths::kv_dir().unwrap();
        assert!(kv_dir.starts_with(&data_dir));
        assert!(kv_dir.ends_with("kv"));
    }
}
