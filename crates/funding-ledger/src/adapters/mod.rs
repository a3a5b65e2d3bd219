//! # Adapters Layer
//!
//! Stand-ins for the execution environment's value transfer, used by the
//! test harness in place of a real chain.

pub mod accounts;

pub use accounts::{FailingTransfer, InMemoryBank};
