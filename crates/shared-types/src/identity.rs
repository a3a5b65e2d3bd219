//! # Contract Identity
//!
//! The deployment-time identity of a contract: which network it landed on,
//! at which address, and the interface it exposes. Created once per
//! deployment; immutable thereafter.

use crate::value_objects::{Address, ChainId};
use serde::{Deserialize, Serialize};

// =============================================================================
// INTERFACE SCHEMA
// =============================================================================

/// Kind of a single interface item.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiItemKind {
    Constructor,
    Function,
    Event,
    Receive,
    Fallback,
}

/// A named, typed parameter of a function or event.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AbiParam {
    pub name: String,
    /// Canonical type name, e.g. `uint256` or `address`.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl AbiParam {
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// One callable operation or event of a contract interface.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AbiItem {
    pub kind: AbiItemKind,
    /// Empty for constructor/receive/fallback entries.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<AbiParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<AbiParam>,
    /// `view`, `payable`, or `nonpayable`.
    pub state_mutability: String,
}

impl AbiItem {
    /// A `view` function with the given inputs and outputs.
    #[must_use]
    pub fn view_function(
        name: impl Into<String>,
        inputs: Vec<AbiParam>,
        outputs: Vec<AbiParam>,
    ) -> Self {
        Self {
            kind: AbiItemKind::Function,
            name: name.into(),
            inputs,
            outputs,
            state_mutability: "view".to_string(),
        }
    }

    /// A state-mutating function.
    #[must_use]
    pub fn function(
        name: impl Into<String>,
        inputs: Vec<AbiParam>,
        outputs: Vec<AbiParam>,
        payable: bool,
    ) -> Self {
        Self {
            kind: AbiItemKind::Function,
            name: name.into(),
            inputs,
            outputs,
            state_mutability: if payable { "payable" } else { "nonpayable" }.to_string(),
        }
    }
}

/// Structured description of a contract's callable operations and events.
///
/// Item order is the declaration order and is preserved through
/// serialization; two schemas are the same interface exactly when their
/// canonical serializations are byte-equal.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceSchema {
    pub items: Vec<AbiItem>,
}

impl InterfaceSchema {
    #[must_use]
    pub fn new(items: Vec<AbiItem>) -> Self {
        Self { items }
    }

    /// The canonical serialized form: compact JSON with the struct's fixed
    /// field order. This is the string persisted in the ABI registry and the
    /// value compared for duplicate detection.
    ///
    /// Serialization of this type cannot fail: there are no non-string map
    /// keys and no non-finite floats.
    #[must_use]
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

// =============================================================================
// CONTRACT IDENTITY
// =============================================================================

/// Identity of one deployed contract on one network.
///
/// One per (contract name, network) pair per deployment epoch.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ContractIdentity {
    /// Contract name, the ABI registry key (e.g. `"FundMe"`).
    pub name: String,
    /// Network the contract was deployed to.
    pub chain_id: ChainId,
    /// On-chain address, immutable once deployed.
    pub address: Address,
    /// Interface the deployed code exposes.
    pub schema: InterfaceSchema,
}

impl ContractIdentity {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        chain_id: ChainId,
        address: Address,
        schema: InterfaceSchema,
    ) -> Self {
        Self {
            name: name.into(),
            chain_id,
            address,
            schema,
        }
    }
}
