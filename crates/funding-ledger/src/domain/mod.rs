//! Domain layer: the pure ledger state machine, its invariants, and the
//! contract's interface description. No I/O here.

pub mod abi;
pub mod entities;
pub mod invariants;

pub use abi::{contract_schema, CONTRACT_NAME};
pub use entities::{FundingLedger, LedgerPhase};
