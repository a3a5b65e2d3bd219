//! # Driving Port (API - Inbound)
//!
//! The narrow, explicit interface of the funding contract — exactly the
//! operations a deployed implementation exposes, so the ledger model can be
//! validated against a fake implementation without any execution
//! environment.

use crate::errors::LedgerError;
use async_trait::async_trait;
use shared_types::{Address, Amount};

/// The funding contract's operations.
///
/// Transitions are atomic with respect to observers: no interleaving of two
/// calls is observable as a partial update (single-writer, serialized
/// transactions). Queries have no side effects.
#[async_trait]
pub trait FundingContract: Send + Sync {
    /// Contributes `amount` from `caller`.
    ///
    /// # Errors
    ///
    /// * `LedgerError::InsufficientContribution` - amount below the
    ///   minimum; no state change
    async fn fund(&self, caller: Address, amount: Amount) -> Result<(), LedgerError>;

    /// Value transfer with no payload. Applies identical preconditions and
    /// effects as [`fund`](Self::fund).
    async fn receive_bare(&self, caller: Address, amount: Amount) -> Result<(), LedgerError>;

    /// Value transfer with an unrecognized payload. The payload is ignored
    /// for accounting; preconditions and effects are identical to
    /// [`fund`](Self::fund).
    async fn receive_with_payload(
        &self,
        caller: Address,
        amount: Amount,
        payload: &[u8],
    ) -> Result<(), LedgerError>;

    /// Transfers the whole treasury to the owner and clears the ledger
    /// atomically.
    ///
    /// # Errors
    ///
    /// * `LedgerError::Unauthorized` - caller is not the owner; ledger
    ///   untouched, treasury included
    /// * `LedgerError::TransferFailed` - the external transfer failed; the
    ///   whole state reset is rolled back
    async fn withdraw(&self, caller: Address) -> Result<(), LedgerError>;

    /// The fixed minimum contribution.
    async fn get_min_fund_amt(&self) -> Amount;

    /// Funder at `index` in contribution order.
    ///
    /// # Errors
    ///
    /// * `LedgerError::FunderIndexOutOfRange` - index past the last funder;
    ///   no default value is fabricated
    async fn get_funders(&self, index: usize) -> Result<Address, LedgerError>;

    /// Cumulative amount contributed by `participant`; zero if they never
    /// contributed.
    async fn get_address_to_amount_funded(&self, participant: Address) -> Amount;

    /// The fixed owner.
    async fn get_owner(&self) -> Address;

    /// Current treasury balance.
    async fn treasury(&self) -> Amount;
}
