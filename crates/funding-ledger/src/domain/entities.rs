//! # Ledger Entities
//!
//! The funding ledger's conceptual state: treasury balance, ordered funder
//! list, per-participant contributions, and the owner / minimum threshold
//! fixed at construction.

use crate::errors::LedgerError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount};
use std::collections::HashMap;

/// Lifecycle phase of the ledger.
///
/// `Active` accepts contributions; `Drained` is the state right after a
/// successful withdrawal, before the next contribution re-activates the
/// ledger. There is no terminal phase: the ledger is perpetually reusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerPhase {
    Active,
    Drained,
}

/// The funding ledger state machine.
///
/// `owner` and `min_contribution` are fixed at construction. Contributions
/// are additive; a withdrawal clears the whole ledger atomically and never
/// partially.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingLedger {
    treasury: Amount,
    funders: Vec<Address>,
    contributions: HashMap<Address, Amount>,
    min_contribution: Amount,
    owner: Address,
    phase: LedgerPhase,
}

impl FundingLedger {
    /// Creates an empty, active ledger with the given fixed owner and
    /// minimum contribution.
    #[must_use]
    pub fn new(owner: Address, min_contribution: Amount) -> Self {
        Self {
            treasury: Amount::zero(),
            funders: Vec::new(),
            contributions: HashMap::new(),
            min_contribution,
            owner,
            phase: LedgerPhase::Active,
        }
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Credits a contribution.
    ///
    /// Rejects amounts below the minimum with NO state change. On success
    /// the amount is added to the participant's cumulative contribution and
    /// to the treasury, and the participant joins `funders` on their first
    /// contribution only (idempotent membership, cumulative amount).
    pub fn credit(&mut self, participant: Address, amount: Amount) -> Result<(), LedgerError> {
        if amount < self.min_contribution {
            return Err(LedgerError::InsufficientContribution {
                sent: amount,
                min: self.min_contribution,
            });
        }

        let recorded = self.contributions.entry(participant).or_insert_with(Amount::zero);
        if recorded.is_zero() && !self.funders.contains(&participant) {
            self.funders.push(participant);
        }
        *recorded += amount;
        self.treasury += amount;
        self.phase = LedgerPhase::Active;
        Ok(())
    }

    /// Checks that `caller` may withdraw. No state change either way.
    pub fn authorize_withdraw(&self, caller: Address) -> Result<(), LedgerError> {
        if caller != self.owner {
            return Err(LedgerError::Unauthorized { caller });
        }
        Ok(())
    }

    /// Clears the whole ledger: zeroes the treasury, empties `funders` and
    /// `contributions`, and enters the `Drained` phase. Returns the drained
    /// amount.
    ///
    /// Callers must complete the external transfer BEFORE draining, so that
    /// a failed transfer leaves the ledger untouched (all-or-nothing).
    pub fn drain(&mut self) -> Amount {
        let drained = self.treasury;
        self.treasury = Amount::zero();
        self.funders.clear();
        self.contributions.clear();
        self.phase = LedgerPhase::Drained;
        drained
    }

    // =========================================================================
    // QUERIES (no side effects)
    // =========================================================================

    /// Funder at a position in contribution order.
    ///
    /// Indexing past the current length is an error, never a fabricated
    /// default value.
    pub fn funder_at(&self, index: usize) -> Result<Address, LedgerError> {
        self.funders
            .get(index)
            .copied()
            .ok_or(LedgerError::FunderIndexOutOfRange {
                index,
                len: self.funders.len(),
            })
    }

    /// Cumulative amount contributed by a participant; zero if they never
    /// contributed (on-chain mapping semantics).
    #[must_use]
    pub fn amount_funded(&self, participant: Address) -> Amount {
        self.contributions
            .get(&participant)
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn treasury(&self) -> Amount {
        self.treasury
    }

    #[must_use]
    pub fn min_contribution(&self) -> Amount {
        self.min_contribution
    }

    #[must_use]
    pub fn owner(&self) -> Address {
        self.owner
    }

    #[must_use]
    pub fn funders(&self) -> &[Address] {
        &self.funders
    }

    #[must_use]
    pub fn funder_count(&self) -> usize {
        self.funders.len()
    }

    /// All recorded (participant, cumulative amount) pairs, unordered.
    pub fn contributions(&self) -> impl Iterator<Item = (Address, Amount)> + '_ {
        self.contributions.iter().map(|(addr, amount)| (*addr, *amount))
    }

    #[must_use]
    pub fn phase(&self) -> LedgerPhase {
        self.phase
    }
}
