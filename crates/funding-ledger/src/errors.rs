//! # Error Types
//!
//! All error types for ledger transitions. Every error is surfaced to the
//! immediate caller; nothing is swallowed or retried, and a failed
//! transition leaves the ledger unchanged.

use shared_types::{Address, Amount};
use thiserror::Error;

/// Errors that can occur during a ledger transition or query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Contribution below the fixed minimum threshold.
    #[error("contribution below minimum: sent {sent}, minimum {min}")]
    InsufficientContribution { sent: Amount, min: Amount },

    /// Withdrawal attempted by someone other than the owner.
    #[error("unauthorized withdrawal by {caller}")]
    Unauthorized { caller: Address },

    /// Funder queried past the end of the funders list.
    #[error("funder index out of range: {index} >= {len}")]
    FunderIndexOutOfRange { index: usize, len: usize },

    /// The external transfer backing a withdrawal failed; the ledger was
    /// rolled back whole.
    #[error("external transfer failed: {0}")]
    TransferFailed(#[from] TransferError),
}

/// Errors from the external value-transfer environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The environment refused or could not complete the transfer.
    #[error("transfer rejected: {reason}")]
    Rejected { reason: String },
}
