//! # Sync Service
//!
//! Orchestrates the read-merge-write round trip for both registry stores.
//! Each store is locked, loaded whole, merged in memory, and written back
//! whole; a failure at any step aborts the call with the persisted content
//! untouched.

use crate::adapters::JsonFileStore;
use crate::domain::{AbiBook, AddressBook, SyncConfig};
use crate::error::RegistryError;
use crate::ports::ArtifactStore;
use shared_types::ContractIdentity;
use tracing::{debug, info};

/// Result of one gated sync run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The opt-in flag was off; neither store was touched.
    Skipped,
    /// Both stores were merged and written back.
    Synced {
        /// Whether the address store gained a new entry.
        address_added: bool,
        /// Whether the ABI store gained a new entry.
        abi_added: bool,
    },
}

/// Keeps the address and ABI stores consistent with the latest deployment.
pub struct SyncService<S: ArtifactStore = JsonFileStore> {
    update_consumer: bool,
    addresses: S,
    abis: S,
}

impl SyncService<JsonFileStore> {
    /// Builds a service over file-backed stores at the configured paths.
    #[must_use]
    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(
            config.update_consumer,
            JsonFileStore::new(&config.addresses_path),
            JsonFileStore::new(&config.abis_path),
        )
    }
}

impl<S: ArtifactStore> SyncService<S> {
    #[must_use]
    pub fn new(update_consumer: bool, addresses: S, abis: S) -> Self {
        Self {
            update_consumer,
            addresses,
            abis,
        }
    }

    /// Runs both syncs for a freshly deployed contract, gated by the
    /// opt-in flag.
    pub fn sync(&self, identity: &ContractIdentity) -> Result<SyncOutcome, RegistryError> {
        if !self.update_consumer {
            debug!("[registry] sync disabled, skipping {}", identity.name);
            return Ok(SyncOutcome::Skipped);
        }

        info!(
            "[registry] syncing {} on chain {} at {}",
            identity.name, identity.chain_id, identity.address
        );
        let address_added = self.sync_address(identity)?;
        let abi_added = self.sync_abi(identity)?;
        info!(
            "[registry] sync complete (address added: {address_added}, abi added: {abi_added})"
        );
        Ok(SyncOutcome::Synced {
            address_added,
            abi_added,
        })
    }

    /// Merges the deployment's address into the address store.
    ///
    /// Idempotent: repeated runs with the same (chain id, address) leave
    /// exactly one entry. Returns whether the store gained a new entry.
    pub fn sync_address(&self, identity: &ContractIdentity) -> Result<bool, RegistryError> {
        let _lock = self.addresses.lock_exclusive()?;
        let mut book: AddressBook = self.addresses.load()?;
        let added = book.record(identity.chain_id, identity.address);
        self.addresses.save(&book)?;
        Ok(added)
    }

    /// Merges the deployment's interface schema into the ABI store, keyed
    /// by contract name. Duplicate detection is by equality of the
    /// canonical serialized schema.
    pub fn sync_abi(&self, identity: &ContractIdentity) -> Result<bool, RegistryError> {
        let _lock = self.abis.lock_exclusive()?;
        let mut book: AbiBook = self.abis.load()?;
        let added = book.record(&identity.name, &identity.schema.canonical_json());
        self.abis.save(&book)?;
        Ok(added)
    }
}
