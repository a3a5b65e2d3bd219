//! # Value Objects
//!
//! Immutable primitives shared by the registry and the ledger model.
//! These types represent concepts that are defined by their value, not identity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Re-export U256 from primitive-types for 256-bit amounts
pub use primitive_types::U256 as Amount;

// =============================================================================
// CHAIN ID
// =============================================================================

/// A network (chain) identifier.
///
/// Persisted registries key on the string form of this value; `serde_json`
/// round-trips integer map keys through strings, so the on-disk shape stays
/// `{"31337": [...]}`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// The local development network (Hardhat/Anvil default).
    pub const LOCAL: Self = Self(31_337);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte on-chain address.
///
/// Canonical identifier of a deployed contract or participant, immutable once
/// assigned. The text form is `0x`-prefixed lowercase hex, which is also the
/// serde representation (the persisted registries store addresses as strings).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Parses the text form; an optional `0x` prefix is accepted.
    pub fn from_hex(s: &str) -> Result<Self, AddressParseError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        if stripped.len() != 40 {
            return Err(AddressParseError::InvalidLength { len: stripped.len() });
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(stripped, &mut bytes)
            .map_err(|source| AddressParseError::InvalidHex { source })?;
        Ok(Self(bytes))
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors from parsing the text form of an [`Address`].
#[derive(Debug, Error)]
pub enum AddressParseError {
    #[error("address must be 40 hex digits, got {len}")]
    InvalidLength { len: usize },

    #[error("invalid hex in address: {source}")]
    InvalidHex {
        #[source]
        source: hex::FromHexError,
    },
}
