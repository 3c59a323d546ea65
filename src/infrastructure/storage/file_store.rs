// src/infrastructure/storage/file_store.rs
use crate::infrastructure::error::{InfrastructureError, InfrastructureResult};
use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// String key-value persistence, the only storage primitive the
/// repositories build on.
pub trait KeyValueStore: Debug + Send + Sync {
    /// Read the value under `key`. A key that was never written is `Ok(None)`.
    fn get(&self, key: &str) -> InfrastructureResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> InfrastructureResult<()>;

    /// Drop `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> InfrastructureResult<()>;
}

/// One file per key inside a store directory.
///
/// The directory is created lazily on the first write, so a fresh setup
/// reads as an empty store without touching the disk.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // Keys map straight to file names, reject anything path-like.
    fn key_path(&self, key: &str) -> InfrastructureResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(InfrastructureError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    #[instrument(skip(self), level = "trace")]
    fn get(&self, key: &str) -> InfrastructureResult<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InfrastructureError::FileSystem(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    #[instrument(skip(self, value), level = "trace")]
    fn set(&self, key: &str, value: &str) -> InfrastructureResult<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.root).map_err(|e| {
            InfrastructureError::FileSystem(format!(
                "Failed to create store directory {}: {}",
                self.root.display(),
                e
            ))
        })?;
        fs::write(&path, value).map_err(|e| {
            InfrastructureError::FileSystem(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    #[instrument(skip(self), level = "trace")]
    fn remove(&self, key: &str) -> InfrastructureResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(InfrastructureError::FileSystem(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
