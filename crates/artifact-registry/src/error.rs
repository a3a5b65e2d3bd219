//! Error types for the artifact registry

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while syncing a registry store.
///
/// All of these are fatal for the sync call that hit them: the design is
/// single-attempt and fail-fast, and a failed call leaves the persisted
/// store untouched.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The persisted store could not be read at all (missing file included).
    #[error("cannot read registry store {path}: {source}")]
    StoreUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted store exists but is not valid structured data.
    #[error("registry store {path} is corrupt: {source}")]
    StoreCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The merged store could not be written back.
    #[error("cannot write registry store {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The advisory lock guarding the read-merge-write round trip failed.
    #[error("cannot lock registry store {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
