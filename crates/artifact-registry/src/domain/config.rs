//! Sync run configuration
//!
//! The sync is a manual/CI gate: it runs only when explicitly opted in.
//! The opt-in switch and both store paths are materialized into an explicit
//! value here so the service itself never reads ambient process state.

use std::path::{Path, PathBuf};

/// Name of the boolean environment switch gating the sync.
pub const UPDATE_FLAG_ENV: &str = "UPDATE_FRONT_END";

/// Configuration for one sync run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// Whether the consumer's stores should be updated at all. When false,
    /// every sync call is a no-op.
    pub update_consumer: bool,
    /// Path of the persisted address store (chain id → addresses).
    pub addresses_path: PathBuf,
    /// Path of the persisted ABI store (contract name → schemas).
    pub abis_path: PathBuf,
}

impl SyncConfig {
    #[must_use]
    pub fn new(
        update_consumer: bool,
        addresses_path: impl AsRef<Path>,
        abis_path: impl AsRef<Path>,
    ) -> Self {
        Self {
            update_consumer,
            addresses_path: addresses_path.as_ref().to_path_buf(),
            abis_path: abis_path.as_ref().to_path_buf(),
        }
    }

    /// Reads the opt-in switch from the environment once, at the edge.
    ///
    /// Only the literal value `"true"` enables the sync; anything else
    /// (including an unset variable) leaves it disabled.
    #[must_use]
    pub fn from_env(addresses_path: impl AsRef<Path>, abis_path: impl AsRef<Path>) -> Self {
        let enabled = std::env::var(UPDATE_FLAG_ENV)
            .map(|value| value == "true")
            .unwrap_or(false);
        Self::new(enabled, addresses_path, abis_path)
    }
}
