//! # Funding Flow Integration
//!
//! Drives the deployed contract service through the full accounting
//! scenario and checks the ledger invariants after every transition.

#[cfg(test)]
mod tests {
    use funding_ledger::domain::invariants::check_all_invariants;
    use funding_ledger::{
        FailingTransfer, FundingContract, FundingContractService, InMemoryBank, LedgerError,
        ValueTransfer,
    };
    use shared_types::{Address, Amount};
    use std::sync::Arc;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    const OWNER: Address = Address::new([0xEE; 20]);
    const P1: Address = Address::new([0x01; 20]);
    const P2: Address = Address::new([0x02; 20]);
    const MIN: u64 = 50;

    fn deploy(bank: Arc<dyn ValueTransfer>) -> FundingContractService {
        FundingContractService::new(OWNER, Amount::from(MIN), bank)
    }

    /// Records every outbound transfer so tests can assert on the exact
    /// recipient and amount.
    #[derive(Default)]
    struct RecordingTransfer {
        calls: tokio::sync::Mutex<Vec<(Address, Amount)>>,
    }

    #[async_trait::async_trait]
    impl ValueTransfer for RecordingTransfer {
        async fn transfer(
            &self,
            to: Address,
            amount: Amount,
        ) -> Result<(), funding_ledger::TransferError> {
            self.calls.lock().await.push((to, amount));
            Ok(())
        }
    }

    async fn assert_invariants(service: &FundingContractService) {
        let result = check_all_invariants(&service.ledger().await);
        assert!(result.is_valid(), "violations: {:?}", result.violations);
    }

    // =========================================================================
    // THE ACCOUNTING SCENARIO
    // =========================================================================

    /// The full walk: two funders, a repeat contribution, a rejected
    /// outsider withdrawal, then the owner draining everything.
    #[tokio::test]
    async fn scenario_fund_refund_withdraw() {
        let bank = Arc::new(InMemoryBank::new());
        let service = deploy(bank.clone());

        // fund(P1, 50)
        service.fund(P1, Amount::from(50)).await.unwrap();
        assert_eq!(service.get_funders(0).await.unwrap(), P1);
        assert_eq!(
            service.get_address_to_amount_funded(P1).await,
            Amount::from(50)
        );
        assert_eq!(service.treasury().await, Amount::from(50));
        assert_invariants(&service).await;

        // fund(P2, 50) then fund(P1, 50)
        service.fund(P2, Amount::from(50)).await.unwrap();
        service.fund(P1, Amount::from(50)).await.unwrap();
        assert_eq!(service.get_funders(0).await.unwrap(), P1);
        assert_eq!(service.get_funders(1).await.unwrap(), P2);
        assert_eq!(
            service.get_address_to_amount_funded(P1).await,
            Amount::from(100)
        );
        assert_eq!(service.treasury().await, Amount::from(150));
        assert_invariants(&service).await;

        // No third funder exists.
        assert!(matches!(
            service.get_funders(2).await,
            Err(LedgerError::FunderIndexOutOfRange { index: 2, len: 2 })
        ));

        // A non-owner cannot withdraw and changes nothing.
        let err = service.withdraw(P2).await.unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized { .. }));
        assert_eq!(service.treasury().await, Amount::from(150));
        assert_invariants(&service).await;

        // The owner drains everything.
        service.withdraw(OWNER).await.unwrap();
        assert!(service.treasury().await.is_zero());
        assert!(service.get_address_to_amount_funded(P1).await.is_zero());
        assert!(service.get_funders(0).await.is_err());
        assert_eq!(bank.balance_of(OWNER).await, Amount::from(150));
        assert_invariants(&service).await;
    }

    #[tokio::test]
    async fn under_threshold_contributions_change_nothing() {
        let service = deploy(Arc::new(InMemoryBank::new()));
        service.fund(P1, Amount::from(MIN)).await.unwrap();

        for amount in [0u64, 1, 49] {
            let err = service.fund(P2, Amount::from(amount)).await.unwrap_err();
            assert!(matches!(err, LedgerError::InsufficientContribution { .. }));
            assert_eq!(service.treasury().await, Amount::from(MIN));
            assert!(service.get_address_to_amount_funded(P2).await.is_zero());
            assert_invariants(&service).await;
        }
    }

    #[tokio::test]
    async fn treasury_equals_contribution_sum_across_many_calls() {
        let service = deploy(Arc::new(InMemoryBank::new()));
        let participants = [P1, P2, Address::new([0x03; 20])];

        for round in 1u64..=5 {
            for participant in participants {
                service
                    .fund(participant, Amount::from(MIN * round))
                    .await
                    .unwrap();
                assert_invariants(&service).await;
            }
        }

        // 3 participants × (50 + 100 + 150 + 200 + 250)
        assert_eq!(service.treasury().await, Amount::from(3 * 750));
    }

    // =========================================================================
    // IMPLICIT ENTRY POINTS
    // =========================================================================

    #[tokio::test]
    async fn all_three_entry_points_account_identically() {
        let service = deploy(Arc::new(InMemoryBank::new()));

        service.fund(P1, Amount::from(MIN)).await.unwrap();
        service.receive_bare(P1, Amount::from(MIN)).await.unwrap();
        service
            .receive_with_payload(P1, Amount::from(MIN), &[0x12, 0x34])
            .await
            .unwrap();

        assert_eq!(
            service.get_address_to_amount_funded(P1).await,
            Amount::from(3 * MIN)
        );
        assert_eq!(service.treasury().await, Amount::from(3 * MIN));
        // Still a single funder slot.
        assert!(service.get_funders(1).await.is_err());
        assert_invariants(&service).await;
    }

    #[tokio::test]
    async fn implicit_entry_points_enforce_the_threshold() {
        let service = deploy(Arc::new(InMemoryBank::new()));

        let bare = service.receive_bare(P1, Amount::from(49)).await;
        assert!(matches!(
            bare,
            Err(LedgerError::InsufficientContribution { .. })
        ));

        let with_payload = service
            .receive_with_payload(P1, Amount::from(49), &[0x12, 0x34])
            .await;
        assert!(matches!(
            with_payload,
            Err(LedgerError::InsufficientContribution { .. })
        ));

        assert!(service.treasury().await.is_zero());
    }

    // =========================================================================
    // WITHDRAW EDGE CASES
    // =========================================================================

    #[tokio::test]
    async fn ledger_is_reusable_after_a_withdrawal() {
        let bank = Arc::new(InMemoryBank::new());
        let service = deploy(bank.clone());

        service.fund(P1, Amount::from(MIN)).await.unwrap();
        service.withdraw(OWNER).await.unwrap();

        // Subsequent contributions re-populate from scratch.
        service.fund(P2, Amount::from(80)).await.unwrap();
        assert_eq!(service.get_funders(0).await.unwrap(), P2);
        assert_eq!(service.treasury().await, Amount::from(80));

        service.withdraw(OWNER).await.unwrap();
        assert_eq!(bank.balance_of(OWNER).await, Amount::from(MIN + 80));
        assert_invariants(&service).await;
    }

    #[tokio::test]
    async fn withdraw_transfers_exactly_the_treasury_to_the_owner() {
        let recorder = Arc::new(RecordingTransfer::default());
        let service = deploy(recorder.clone());

        service.fund(P1, Amount::from(MIN)).await.unwrap();
        service.fund(P2, Amount::from(120)).await.unwrap();
        service.withdraw(OWNER).await.unwrap();

        let calls = recorder.calls.lock().await;
        assert_eq!(calls.as_slice(), &[(OWNER, Amount::from(MIN + 120))][..]);
    }

    #[tokio::test]
    async fn failed_external_transfer_leaves_the_ledger_intact() {
        let service = deploy(Arc::new(FailingTransfer));
        service.fund(P1, Amount::from(MIN)).await.unwrap();
        service.fund(P2, Amount::from(MIN)).await.unwrap();

        let err = service.withdraw(OWNER).await.unwrap_err();
        assert!(matches!(err, LedgerError::TransferFailed(_)));

        assert_eq!(service.treasury().await, Amount::from(2 * MIN));
        assert_eq!(service.get_funders(0).await.unwrap(), P1);
        assert_eq!(service.get_funders(1).await.unwrap(), P2);
        assert_eq!(
            service.get_address_to_amount_funded(P1).await,
            Amount::from(MIN)
        );
        assert_invariants(&service).await;
    }
}
