//! File-backed JSON store.

use crate::error::RegistryError;
use crate::ports::ArtifactStore;
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON document persisted as a single file.
///
/// `load` reads and parses the whole file; `save` serializes the whole
/// document to a temporary sibling, fsyncs it, and renames it over the
/// store, so readers never observe a partially-updated store. The advisory
/// lock lives on a `.lock` sidecar rather than the store itself, because
/// the rename in `save` replaces the store's inode.
pub struct JsonFileStore {
    path: PathBuf,
}

/// Exclusive lock on a store, released on drop.
pub struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl JsonFileStore {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }
}

impl ArtifactStore for JsonFileStore {
    type Lock = StoreLock;

    fn lock_exclusive(&self) -> Result<StoreLock, RegistryError> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| RegistryError::Lock {
                path: lock_path.clone(),
                source,
            })?;
        file.lock_exclusive().map_err(|source| RegistryError::Lock {
            path: lock_path,
            source,
        })?;
        Ok(StoreLock { file })
    }

    fn load<T: DeserializeOwned>(&self) -> Result<T, RegistryError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| RegistryError::StoreUnreadable {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            "[registry] 💾 Loaded store {} ({} bytes)",
            self.path.display(),
            content.len()
        );
        serde_json::from_str(&content).map_err(|source| RegistryError::StoreCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save<T: Serialize>(&self, value: &T) -> Result<(), RegistryError> {
        // Serialization of the registry books cannot fail; treat a failure
        // as a corrupt in-memory document rather than panicking.
        let content = serde_json::to_string(value).map_err(|source| RegistryError::StoreCorrupt {
            path: self.path.clone(),
            source,
        })?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path).map_err(|source| RegistryError::StoreWrite {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(content.as_bytes())
            .map_err(|source| RegistryError::StoreWrite {
                path: self.path.clone(),
                source,
            })?;
        file.sync_all().map_err(|source| RegistryError::StoreWrite {
            path: self.path.clone(),
            source,
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|source| RegistryError::StoreWrite {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            "[registry] 💾 Saved store {} ({} bytes)",
            self.path.display(),
            content.len()
        );
        Ok(())
    }
}
