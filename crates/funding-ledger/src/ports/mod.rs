//! # Ports Layer
//!
//! Trait definitions for the funding ledger.
//!
//! - **Driving Port (Inbound)**: `FundingContract`
//! - **Driven Port (Outbound)**: `ValueTransfer`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::FundingContract;
pub use outbound::ValueTransfer;
