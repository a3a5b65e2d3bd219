//! # Artifact Registry
//!
//! Keeps two JSON-backed registries consistent with the latest deployed
//! contract identity, without duplicating entries across repeated runs:
//!
//! - an **address store** keyed by chain id, values are insertion-ordered
//!   lists of addresses with no duplicates;
//! - an **ABI store** keyed by contract name, values are insertion-ordered
//!   lists of canonical interface-schema strings with no duplicates.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure merge logic, no I/O
//!   - `AddressBook`: chain id → ordered address set
//!   - `AbiBook`: contract name → ordered canonical-schema set
//!   - `SyncConfig`: explicit run configuration (opt-in flag + store paths)
//! - **Ports Layer** (`ports/`): `ArtifactStore` driven port
//! - **Adapters Layer** (`adapters/`): `JsonFileStore` file-backed store
//! - **Service Layer** (`service.rs`): `SyncService` read-merge-write
//!   orchestration
//!
//! ## Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | An address appears at most once per chain id | `domain/address_book.rs` - `AddressBook::record()` |
//! | INVARIANT-2 | Identical schemas are never appended twice per name | `domain/abi_book.rs` - `AbiBook::record()` |
//! | INVARIANT-3 | Stores are replaced whole, never edited in place | `adapters/json_file.rs` - `JsonFileStore::save()` |
//!
//! ## Failure Semantics
//!
//! Any read or parse failure on either store is fatal for that sync call and
//! no merge is attempted. Writes serialize the full merged structure to a
//! temporary file and rename it over the store, so a failed write leaves the
//! previous content intact. Overlapping syncs against the same store are
//! excluded by an advisory file lock held across the whole round trip.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::JsonFileStore;
pub use domain::{AbiBook, AddressBook, SyncConfig};
pub use error::RegistryError;
pub use service::{SyncOutcome, SyncService};
