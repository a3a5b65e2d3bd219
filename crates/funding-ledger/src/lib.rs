//! # Funding Ledger - Accounting Model
//!
//! Executable model of the funding contract's ledger: the state machine a
//! conforming on-chain implementation must satisfy, defined independently of
//! any particular execution environment so a harness can validate a concrete
//! implementation against a fake one.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure state machine, no I/O
//!   - `FundingLedger`: treasury, funders, contributions, fixed owner and
//!     minimum contribution
//!   - `invariants`: runtime checks over any ledger state
//!   - `contract_schema`: the interface the deployed contract exposes
//! - **Ports Layer** (`ports/`): `FundingContract` driving port,
//!   `ValueTransfer` driven port
//! - **Service Layer** (`service.rs`): `FundingContractService` serialized
//!   transitions over the ledger
//! - **Adapters Layer** (`adapters/`): `InMemoryBank` / `FailingTransfer`
//!   stand-ins for the execution environment's value transfer
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Treasury conservation: `treasury == sum(contributions)` | `domain/invariants.rs` - `check_conservation_invariant()` |
//! | INVARIANT-2 | Unique funder membership | `domain/invariants.rs` - `check_unique_funders_invariant()` |
//! | INVARIANT-3 | Funders and contributions agree | `domain/invariants.rs` - `check_membership_invariant()` |
//!
//! ## Transition Safety
//!
//! Every failed transition leaves the observable ledger state unchanged
//! (strong exception safety): an under-threshold contribution, an
//! unauthorized withdrawal, and a failed external transfer all surface an
//! error without mutating the ledger. A successful withdrawal transfers the
//! whole treasury and clears funders and contributions atomically.

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

pub use adapters::{FailingTransfer, InMemoryBank};
pub use domain::{contract_schema, FundingLedger, LedgerPhase, CONTRACT_NAME};
pub use errors::{LedgerError, TransferError};
pub use ports::{FundingContract, ValueTransfer};
pub use service::FundingContractService;
