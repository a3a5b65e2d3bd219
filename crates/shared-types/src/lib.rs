//! # Shared Types Crate
//!
//! Cross-crate value objects for the FundMe toolkit: chain identifiers,
//! on-chain addresses, 256-bit amounts, and the deployment-time
//! `ContractIdentity` with its interface schema.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Value Semantics**: Every type is defined by its value, not identity;
//!   a `ContractIdentity` is created once per deployment and never mutated.
//! - **Canonical Serialization**: `InterfaceSchema::canonical_json` is the
//!   one serialized form used for by-value duplicate detection downstream.

pub mod identity;
pub mod value_objects;

pub use identity::{AbiItem, AbiItemKind, AbiParam, ContractIdentity, InterfaceSchema};
pub use value_objects::{Address, AddressParseError, Amount, ChainId};
