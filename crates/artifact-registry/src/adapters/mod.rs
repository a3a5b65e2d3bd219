//! # Adapters Layer
//!
//! Concrete store implementations behind the `ArtifactStore` port.

pub mod json_file;

pub use json_file::{JsonFileStore, StoreLock};
