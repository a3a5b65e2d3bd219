//! # Funding Contract Service
//!
//! Implements the `FundingContract` port over the pure ledger state
//! machine. Each transition takes the write lock for its whole duration,
//! matching the single-writer, serialized-transaction execution model: no
//! interleaving of two transitions is observable as a partial update.

use crate::domain::{contract_schema, FundingLedger, CONTRACT_NAME};
use crate::errors::LedgerError;
use crate::ports::{FundingContract, ValueTransfer};
use async_trait::async_trait;
use shared_types::{Address, Amount, ChainId, ContractIdentity};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Serialized-transition façade over a [`FundingLedger`].
pub struct FundingContractService {
    ledger: RwLock<FundingLedger>,
    transfer: Arc<dyn ValueTransfer>,
}

impl FundingContractService {
    /// "Deploys" the contract: fixes the owner and minimum contribution and
    /// wires in the environment's value transfer.
    #[must_use]
    pub fn new(owner: Address, min_contribution: Amount, transfer: Arc<dyn ValueTransfer>) -> Self {
        Self {
            ledger: RwLock::new(FundingLedger::new(owner, min_contribution)),
            transfer,
        }
    }

    /// The deployment identity to hand to the artifact registry.
    #[must_use]
    pub fn identity(&self, chain_id: ChainId, address: Address) -> ContractIdentity {
        ContractIdentity::new(CONTRACT_NAME, chain_id, address, contract_schema())
    }

    /// Snapshot of the current ledger state, for invariant checks.
    pub async fn ledger(&self) -> FundingLedger {
        self.ledger.read().await.clone()
    }

    async fn credit(
        &self,
        entry: &str,
        caller: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut ledger = self.ledger.write().await;
        ledger.credit(caller, amount)?;
        info!(
            "[ledger] 💰 {entry}: {caller} contributed {amount} (treasury {})",
            ledger.treasury()
        );
        Ok(())
    }
}

#[async_trait]
impl FundingContract for FundingContractService {
    async fn fund(&self, caller: Address, amount: Amount) -> Result<(), LedgerError> {
        self.credit("fund", caller, amount).await
    }

    async fn receive_bare(&self, caller: Address, amount: Amount) -> Result<(), LedgerError> {
        // Value with no data: an implicit fund call.
        self.credit("receive", caller, amount).await
    }

    async fn receive_with_payload(
        &self,
        caller: Address,
        amount: Amount,
        payload: &[u8],
    ) -> Result<(), LedgerError> {
        // Unrecognized selector: the payload plays no accounting role.
        debug!(
            "[ledger] fallback payload 0x{} ignored ({} bytes)",
            hex::encode(payload),
            payload.len()
        );
        self.credit("fallback", caller, amount).await
    }

    async fn withdraw(&self, caller: Address) -> Result<(), LedgerError> {
        let mut ledger = self.ledger.write().await;
        ledger.authorize_withdraw(caller)?;

        // Transfer first: a failed transfer must leave the ledger untouched.
        let amount = ledger.treasury();
        self.transfer.transfer(ledger.owner(), amount).await?;
        let drained = ledger.drain();
        info!("[ledger] 🏦 withdraw: {drained} transferred to {caller}, ledger cleared");
        Ok(())
    }

    async fn get_min_fund_amt(&self) -> Amount {
        self.ledger.read().await.min_contribution()
    }

    async fn get_funders(&self, index: usize) -> Result<Address, LedgerError> {
        self.ledger.read().await.funder_at(index)
    }

    async fn get_address_to_amount_funded(&self, participant: Address) -> Amount {
        self.ledger.read().await.amount_funded(participant)
    }

    async fn get_owner(&self) -> Address {
        self.ledger.read().await.owner()
    }

    async fn treasury(&self) -> Amount {
        self.ledger.read().await.treasury()
    }
}
