//! # Ports Layer
//!
//! Trait definitions for the artifact registry.
//! No concrete implementations in this module.

pub mod outbound;

pub use outbound::ArtifactStore;
