//! # Deploy Pipeline Integration
//!
//! The whole flow a deployment runs: stand up the contract, take its
//! identity, and sync it into the consumer's stores.

#[cfg(test)]
mod tests {
    use artifact_registry::{SyncConfig, SyncOutcome, SyncService};
    use funding_ledger::{FundingContractService, InMemoryBank, CONTRACT_NAME};
    use shared_types::{Address, Amount, ChainId};
    use std::sync::Arc;

    const OWNER: Address = Address::new([0xEE; 20]);
    const DEPLOYED_AT: Address = Address::new([0x42; 20]);

    #[test]
    fn deployment_identity_lands_in_both_stores_once() {
        let dir = tempfile::tempdir().unwrap();
        let addresses = dir.path().join("contractAddresses.json");
        let abis = dir.path().join("contractABIs.json");
        std::fs::write(&addresses, "{}").unwrap();
        std::fs::write(&abis, "{}").unwrap();

        let contract =
            FundingContractService::new(OWNER, Amount::from(50), Arc::new(InMemoryBank::new()));
        let identity = contract.identity(ChainId::LOCAL, DEPLOYED_AT);

        let sync = SyncService::from_config(&SyncConfig::new(true, &addresses, &abis));
        assert_eq!(
            sync.sync(&identity).unwrap(),
            SyncOutcome::Synced {
                address_added: true,
                abi_added: true
            }
        );
        // A CI re-run of the same deployment changes nothing.
        assert_eq!(
            sync.sync(&identity).unwrap(),
            SyncOutcome::Synced {
                address_added: false,
                abi_added: false
            }
        );

        let address_doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&addresses).unwrap()).unwrap();
        assert_eq!(
            address_doc[ChainId::LOCAL.to_string()],
            serde_json::json!([DEPLOYED_AT.to_string()])
        );

        let abi_doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&abis).unwrap()).unwrap();
        let schemas = abi_doc[CONTRACT_NAME].as_array().unwrap();
        assert_eq!(schemas.len(), 1);
        // The persisted schema parses back to the contract's interface.
        let schema: serde_json::Value =
            serde_json::from_str(schemas[0].as_str().unwrap()).unwrap();
        let names: Vec<&str> = schema
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|item| item["name"].as_str())
            .collect();
        for operation in [
            "fund",
            "withdraw",
            "getMinFundAmt",
            "getFunders",
            "getAddressToAmountFunded",
        ] {
            assert!(names.contains(&operation), "schema missing {operation}");
        }
    }

    #[test]
    fn redeployment_to_a_second_network_keeps_stores_disjoint() {
        let dir = tempfile::tempdir().unwrap();
        let addresses = dir.path().join("contractAddresses.json");
        let abis = dir.path().join("contractABIs.json");
        std::fs::write(&addresses, "{}").unwrap();
        std::fs::write(&abis, "{}").unwrap();

        let contract =
            FundingContractService::new(OWNER, Amount::from(50), Arc::new(InMemoryBank::new()));
        let sync = SyncService::from_config(&SyncConfig::new(true, &addresses, &abis));

        sync.sync(&contract.identity(ChainId::LOCAL, DEPLOYED_AT))
            .unwrap();
        sync.sync(&contract.identity(ChainId::new(11_155_111), DEPLOYED_AT))
            .unwrap();

        let address_doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&addresses).unwrap()).unwrap();
        assert_eq!(address_doc["31337"].as_array().unwrap().len(), 1);
        assert_eq!(address_doc["11155111"].as_array().unwrap().len(), 1);

        // One contract name, one schema, regardless of networks.
        let abi_doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&abis).unwrap()).unwrap();
        assert_eq!(abi_doc[CONTRACT_NAME].as_array().unwrap().len(), 1);
    }
}
