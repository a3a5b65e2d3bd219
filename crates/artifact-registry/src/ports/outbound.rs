//! # Driven Ports (Outbound)
//!
//! Interface the registry service depends on for persistence. Adapters
//! implement this trait to provide the actual storage backend.

use crate::error::RegistryError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persisted registry store holding one whole JSON document.
///
/// The service performs a full read-then-write round trip per sync call.
/// Implementations must make `save` replace the previous content as a
/// single unit (never an incremental in-place edit), and must provide a
/// mutual-exclusion guard spanning the round trip, since there is no
/// optimistic concurrency check.
pub trait ArtifactStore {
    /// Guard holding the store's exclusive lock; released on drop.
    type Lock;

    /// Acquires the store's exclusive lock.
    fn lock_exclusive(&self) -> Result<Self::Lock, RegistryError>;

    /// Loads and parses the whole persisted document.
    ///
    /// # Errors
    ///
    /// * `RegistryError::StoreUnreadable` - content could not be read
    /// * `RegistryError::StoreCorrupt` - content is not valid structured data
    fn load<T: DeserializeOwned>(&self) -> Result<T, RegistryError>;

    /// Serializes `value` and replaces the persisted document atomically.
    fn save<T: Serialize>(&self, value: &T) -> Result<(), RegistryError>;
}
