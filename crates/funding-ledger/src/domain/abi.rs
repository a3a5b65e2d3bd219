//! Interface description of the deployed funding contract.
//!
//! This is the schema that deployment hands to the artifact registry; it
//! enumerates exactly the operations the `FundingContract` port exposes.

use shared_types::{AbiItem, AbiItemKind, AbiParam, InterfaceSchema};

/// The contract name used as the ABI registry key.
pub const CONTRACT_NAME: &str = "FundMe";

/// The funding contract's callable operations and implicit entry points.
#[must_use]
pub fn contract_schema() -> InterfaceSchema {
    InterfaceSchema::new(vec![
        AbiItem {
            kind: AbiItemKind::Constructor,
            name: String::new(),
            inputs: vec![AbiParam::new("minFundAmt", "uint256")],
            outputs: vec![],
            state_mutability: "nonpayable".to_string(),
        },
        AbiItem::function("fund", vec![], vec![], true),
        AbiItem::function("withdraw", vec![], vec![], false),
        AbiItem::view_function("getMinFundAmt", vec![], vec![AbiParam::new("", "uint256")]),
        AbiItem::view_function(
            "getFunders",
            vec![AbiParam::new("index", "uint256")],
            vec![AbiParam::new("", "address")],
        ),
        AbiItem::view_function(
            "getAddressToAmountFunded",
            vec![AbiParam::new("funder", "address")],
            vec![AbiParam::new("", "uint256")],
        ),
        AbiItem::view_function("getOwner", vec![], vec![AbiParam::new("", "address")]),
        // Implicit value-transfer entry points; both route to fund.
        AbiItem {
            kind: AbiItemKind::Receive,
            name: String::new(),
            inputs: vec![],
            outputs: vec![],
            state_mutability: "payable".to_string(),
        },
        AbiItem {
            kind: AbiItemKind::Fallback,
            name: String::new(),
            inputs: vec![],
            outputs: vec![],
            state_mutability: "payable".to_string(),
        },
    ])
}
