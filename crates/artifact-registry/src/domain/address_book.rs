//! Address registry: chain id → ordered set of deployed addresses.

use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainId};
use std::collections::BTreeMap;

/// Mapping from chain id to the addresses deployed on that network.
///
/// Each list preserves insertion order and contains no duplicates; an
/// address appears at most once per chain id no matter how many times the
/// same deployment is recorded. The persisted form is a JSON object with
/// string-encoded chain ids as keys and arrays of address strings as values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    entries: BTreeMap<ChainId, Vec<Address>>,
}

impl AddressBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a deployment. Appends `address` under `chain_id` only if it
    /// is not already present; a new chain id gets a singleton list.
    ///
    /// Returns `true` if the book changed.
    pub fn record(&mut self, chain_id: ChainId, address: Address) -> bool {
        let addresses = self.entries.entry(chain_id).or_default();
        if addresses.contains(&address) {
            return false;
        }
        addresses.push(address);
        true
    }

    /// Addresses recorded for a network, in insertion order.
    #[must_use]
    pub fn addresses(&self, chain_id: ChainId) -> &[Address] {
        self.entries
            .get(&chain_id)
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, chain_id: ChainId, address: Address) -> bool {
        self.addresses(chain_id).contains(&address)
    }

    /// Number of networks with at least one recorded address.
    #[must_use]
    pub fn network_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
