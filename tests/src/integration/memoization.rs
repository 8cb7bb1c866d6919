//! # Memoization Across Snapshot Updates
//!
//! Each derivation returns the same `Arc` until one of the slices it reads is
//! replaced. Updates build a new snapshot through the `with_*` builders, which
//! swap exactly one slice and share the rest.

#[cfg(test)]
mod tests {
    use crate::fixtures::{full_snapshot, REMIX};

    use ds_01_confirmation_resolution::{ConfirmationResolutionApi, Outcome};
    use ds_02_account_ordering::AccountOrderingApi;
    use ds_03_bridge_eligibility::BridgeEligibilityApi;
    use proptest::prelude::*;
    use shared_types::{
        ActiveTab, ApprovalType, KeyringGroup, PendingApproval, ProviderConfig, WalletState,
    };
    use state_runtime::{DerivedReport, DerivedStateRuntime};
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn same_derivations(a: &DerivedReport, b: &DerivedReport) -> [bool; 3] {
        [
            Arc::ptr_eq(&a.current_confirmation, &b.current_confirmation),
            Arc::ptr_eq(&a.ordered_connected_accounts, &b.ordered_connected_accounts),
            Arc::ptr_eq(&a.bridge, &b.bridge),
        ]
    }

    fn reversed_keyring(state: &WalletState) -> Vec<KeyringGroup> {
        state
            .keyrings
            .iter()
            .map(|group| KeyringGroup {
                keyring_type: group.keyring_type.clone(),
                accounts: group.accounts.iter().rev().cloned().collect(),
            })
            .collect()
    }

    // =============================================================================
    // INTEGRATION TESTS: IDENTITY
    // =============================================================================

    #[test]
    fn test_unchanged_snapshot_reuses_every_result() {
        let state = full_snapshot().unwrap();
        let runtime = DerivedStateRuntime::new();

        let first = runtime.report(&state, None, None);
        let second = runtime.report(&state.clone(), None, None);

        assert_eq!(same_derivations(&first, &second), [true; 3]);
        assert!(Arc::ptr_eq(&first.last_connected_info, &second.last_connected_info));
        assert!(Arc::ptr_eq(&first.connected_subjects, &second.connected_subjects));
        assert_eq!(runtime.resolver().stats().1.recomputations, 1);
        assert_eq!(runtime.ordering().stats().1.recomputations, 1);
    }

    #[test]
    fn test_keyring_update_recomputes_ordering_only() {
        let state = full_snapshot().unwrap();
        let runtime = DerivedStateRuntime::new();
        let before = runtime.report(&state, None, None);

        let keyrings = reversed_keyring(&state);
        let next = state.with_keyrings(keyrings);
        let after = runtime.report(&next, None, None);

        assert_eq!(same_derivations(&before, &after), [true, false, true]);
        // Reversed keyring moves 0x0dcd... ahead of 0x8e5d... at equal recency.
        assert_eq!(
            after.ordered_connected_accounts[1].address,
            "0x0dcd5d886577d5081b0c52e242ef29e70be3e7bc"
        );
    }

    #[test]
    fn test_provider_update_recomputes_resolution_and_bridge() {
        let state = full_snapshot().unwrap();
        let runtime = DerivedStateRuntime::new();
        let before = runtime.report(&state, Some("tx-1"), None);

        let next = state.with_provider_config(ProviderConfig::for_chain("0x38"));
        let after = runtime.report(&next, Some("tx-1"), None);

        assert_eq!(same_derivations(&before, &after), [false, true, false]);
        assert_eq!(after.current_confirmation.outcome, Outcome::ChainMismatch);
        assert!(!after.bridge.eligible);
    }

    #[test]
    fn test_new_approval_moves_latest_target() {
        let state = full_snapshot().unwrap();
        let runtime = DerivedStateRuntime::new();
        let before = runtime.report(&state, None, None);

        let mut approvals = (*state.pending_approvals).clone();
        approvals.insert(
            "msg-1",
            PendingApproval::new("msg-1", ApprovalType::PersonalSign, 9),
        );
        let next = state.with_pending_approvals(approvals);
        let after = runtime.report(&next, None, None);

        assert_eq!(before.latest_pending_approval.as_ref().unwrap().id, "typed-1");
        assert_eq!(after.latest_pending_approval.as_ref().unwrap().id, "msg-1");
        assert_eq!(same_derivations(&before, &after), [false, true, true]);
        assert_eq!(
            after.current_confirmation.confirmation.as_ref().unwrap().id(),
            "msg-1"
        );
    }

    #[test]
    fn test_active_tab_update_switches_origin() {
        let state = full_snapshot().unwrap();
        let runtime = DerivedStateRuntime::new();
        let remix = runtime.report(&state, None, None);

        let next = state.with_active_tab(ActiveTab {
            origin: Some("peepeth.com".into()),
            ..Default::default()
        });
        let peepeth = runtime.report(&next, None, None);

        assert_eq!(remix.ordered_connected_accounts.len(), 5);
        assert_eq!(peepeth.ordered_connected_accounts.len(), 1);
        assert_eq!(same_derivations(&remix, &peepeth), [true, false, true]);
    }

    #[test]
    fn test_services_shared_across_threads() {
        let state = full_snapshot().unwrap();
        let runtime = DerivedStateRuntime::new();
        let expected = runtime.report(&state, None, None);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let ordered = runtime
                        .ordering()
                        .get_ordered_connected_accounts(&state, REMIX);
                    assert!(Arc::ptr_eq(&ordered, &expected.ordered_connected_accounts));
                    assert!(runtime.bridge().is_bridge_transaction(&state));
                    assert!(runtime
                        .resolver()
                        .resolve_current_confirmation(&state, None)
                        .is_some());
                });
            }
        });

        assert_eq!(runtime.ordering().stats().1.recomputations, 1);
    }

    // =============================================================================
    // PROPERTY TESTS
    // =============================================================================

    proptest! {
        #[test]
        fn prop_reports_agree_with_fresh_runtime(route in prop::sample::select(vec![
            "msg-1", "siwe-1", "tx-1", "tx-cancel", "tx-foreign", "typed-1", "chain-1", "none",
        ])) {
            let state = full_snapshot().unwrap();
            let shared = DerivedStateRuntime::new();

            // Warm the shared runtime on a different route first.
            shared.report(&state, Some("tx-submitted"), None);
            let cached = shared.report(&state, Some(route), None);
            let fresh = DerivedStateRuntime::new().report(&state, Some(route), None);

            prop_assert_eq!(&*cached.current_confirmation, &*fresh.current_confirmation);
            prop_assert_eq!(&*cached.ordered_connected_accounts, &*fresh.ordered_connected_accounts);
            prop_assert_eq!(*cached.bridge, *fresh.bridge);
        }
    }
}
