//! # Domain Invariants
//!
//! Runtime checks over any ledger state. A conforming implementation must
//! keep all of these true after every transition:
//!
//! - INVARIANT-1: Treasury Conservation
//! - INVARIANT-2: Unique Funder Membership
//! - INVARIANT-3: Funder/Contribution Agreement

use crate::domain::entities::FundingLedger;
use shared_types::Amount;
use std::collections::HashSet;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Treasury Conservation
///
/// The treasury equals the sum of all recorded contributions. Nothing
/// enters or leaves the ledger outside credit and drain.
#[must_use]
pub fn check_conservation_invariant(ledger: &FundingLedger) -> bool {
    let sum = ledger
        .contributions()
        .fold(Amount::zero(), |acc, (_, amount)| acc + amount);
    ledger.treasury() == sum
}

/// INVARIANT-2: Unique Funder Membership
///
/// A participant appears in the funders list at most once, no matter how
/// many times they contribute.
#[must_use]
pub fn check_unique_funders_invariant(ledger: &FundingLedger) -> bool {
    let mut seen = HashSet::new();
    ledger.funders().iter().all(|funder| seen.insert(*funder))
}

/// INVARIANT-3: Funder/Contribution Agreement
///
/// Every listed funder has a recorded contribution of at least the minimum,
/// and every recorded contribution belongs to a listed funder.
#[must_use]
pub fn check_membership_invariant(ledger: &FundingLedger) -> bool {
    let funders_covered = ledger
        .funders()
        .iter()
        .all(|funder| ledger.amount_funded(*funder) >= ledger.min_contribution());
    let contributions_covered = ledger
        .contributions()
        .all(|(participant, _)| ledger.funders().contains(&participant));
    funders_covered && contributions_covered
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(ledger: &FundingLedger) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_conservation_invariant(ledger) {
        violations.push(InvariantViolation::TreasuryNotConserved {
            treasury: ledger.treasury(),
        });
    }

    if !check_unique_funders_invariant(ledger) {
        violations.push(InvariantViolation::DuplicateFunder);
    }

    if !check_membership_invariant(ledger) {
        violations.push(InvariantViolation::MembershipMismatch);
    }

    InvariantCheckResult { violations }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A specific invariant violation found in a ledger state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Treasury differs from the contribution sum.
    TreasuryNotConserved { treasury: Amount },
    /// The same address appears twice in the funders list.
    DuplicateFunder,
    /// Funders and contributions disagree.
    MembershipMismatch,
}

/// Outcome of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantCheckResult {
    pub violations: Vec<InvariantViolation>,
}

impl InvariantCheckResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}
