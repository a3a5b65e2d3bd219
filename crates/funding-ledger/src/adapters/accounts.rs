//! In-memory value-transfer adapters.

use crate::errors::TransferError;
use crate::ports::ValueTransfer;
use async_trait::async_trait;
use shared_types::{Address, Amount};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Account balances held in memory.
///
/// The harness's stand-in for the execution environment: a withdrawal's
/// outbound transfer credits the recipient here, and tests read the balance
/// back to check conservation end to end.
#[derive(Default)]
pub struct InMemoryBank {
    balances: Mutex<HashMap<Address, Amount>>,
}

impl InMemoryBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance of an account; zero if never credited.
    pub async fn balance_of(&self, account: Address) -> Amount {
        self.balances
            .lock()
            .await
            .get(&account)
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ValueTransfer for InMemoryBank {
    async fn transfer(&self, to: Address, amount: Amount) -> Result<(), TransferError> {
        let mut balances = self.balances.lock().await;
        let balance = balances.entry(to).or_insert_with(Amount::zero);
        *balance += amount;
        Ok(())
    }
}

/// Always-failing transfer, for rollback tests.
#[derive(Default)]
pub struct FailingTransfer;

#[async_trait]
impl ValueTransfer for FailingTransfer {
    async fn transfer(&self, _to: Address, _amount: Amount) -> Result<(), TransferError> {
        Err(TransferError::Rejected {
            reason: "transfer environment unavailable".to_string(),
        })
    }
}
