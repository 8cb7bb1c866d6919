//! # Integration Test Flows
//!
//! Evaluates every derivation against the fixture snapshots:
//!
//! 1. **Confirmation resolution**: latest-approval and route-id targeting
//!    across messages, SIWE requests and transactions in several states
//! 2. **Account ordering**: the remix allow-list ordered by recency then
//!    keyring position, plus the per-origin summaries
//! 3. **Bridge eligibility**: flags and chain switches
//! 4. **Runtime report**: the three derivations read together

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        connected_subjects, full_snapshot, pending_confirmations, remix_permissions, PEEPETH, REMIX,
    };

    use ds_01_confirmation_resolution::{
        ConfirmationKind, ConfirmationResolutionApi, ConfirmationResolver, GateReason, Outcome,
    };
    use ds_02_account_ordering::{AccountOrderingApi, AccountOrderingService};
    use ds_03_bridge_eligibility::{BridgeEligibilityApi, BridgeEligibilityService, BridgeReason};
    use shared_types::{
        BridgeState, FeatureFlags, Preferences, ProviderConfig, TransactionStatus, WalletState,
    };
    use state_runtime::DerivedStateRuntime;
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const ACCOUNT_1: &str = "07c2cfec-36c9-46c4-8115-3836d3ac9047";
    const ACCOUNT_2: &str = "15e69915-2a1a-4019-93b3-916e11fd432f";
    const ACCOUNT_3: &str = "784225f4-d30b-4e77-a900-c8bbce735b88";
    const ACCOUNT_4: &str = "f9305241-c50f-4725-ad0f-cbd3f24ac7ab";
    const LONG_NAME: &str = "cf8dace4-9439-4bd4-b3a8-88c821c8fcb3";

    fn outcome(resolver: &ConfirmationResolver, state: &WalletState, route_id: &str) -> Outcome {
        resolver.explain(state, Some(route_id)).outcome
    }

    fn ordered_ids(service: &AccountOrderingService, state: &WalletState, origin: &str) -> Vec<String> {
        service
            .get_ordered_connected_accounts(state, origin)
            .iter()
            .map(|account| account.id.clone())
            .collect()
    }

    // =============================================================================
    // INTEGRATION TESTS: CONFIRMATION RESOLUTION
    // =============================================================================

    #[test]
    fn test_latest_approval_resolves_typed_message() {
        let state = pending_confirmations().unwrap();
        let resolver = ConfirmationResolver::new();

        let latest = resolver.latest_pending_approval(&state).unwrap();
        assert_eq!(latest.id, "typed-1");

        let current = resolver.resolve_current_confirmation(&state, None).unwrap();
        assert_eq!(current.kind(), ConfirmationKind::Signature);
        assert!(Arc::ptr_eq(
            current.as_message().unwrap(),
            &state.unapproved_typed_messages["typed-1"]
        ));
    }

    #[test]
    fn test_route_id_selects_each_queue_entry() {
        let state = pending_confirmations().unwrap();
        let resolver = ConfirmationResolver::new();

        assert_eq!(outcome(&resolver, &state, "msg-1"), Outcome::Resolved);
        assert_eq!(outcome(&resolver, &state, "siwe-1"), Outcome::SiweExcluded);
        assert_eq!(outcome(&resolver, &state, "tx-1"), Outcome::Resolved);
        assert_eq!(outcome(&resolver, &state, "tx-foreign"), Outcome::ChainMismatch);
        assert_eq!(outcome(&resolver, &state, "tx-submitted"), Outcome::NotUnapproved);
        assert_eq!(
            outcome(&resolver, &state, "tx-cancel"),
            Outcome::ExcludedTransactionType
        );
        assert_eq!(
            outcome(&resolver, &state, "chain-1"),
            Outcome::Gated(GateReason::UnsupportedType)
        );
        assert_eq!(outcome(&resolver, &state, "not-queued"), Outcome::NoTarget);
    }

    #[test]
    fn test_resolved_transaction_is_the_stored_record() {
        let state = pending_confirmations().unwrap();
        let current =
            ds_01_confirmation_resolution::resolve_current_confirmation(&state, Some("tx-1"))
                .unwrap();

        let tx = current.as_transaction().unwrap();
        assert_eq!(tx.status, TransactionStatus::Unapproved);
        assert!(Arc::ptr_eq(tx, state.find_transaction("tx-1").unwrap()));
    }

    #[test]
    fn test_user_preference_gates_every_entry() {
        let state = pending_confirmations().unwrap().with_preferences(Preferences {
            redesigned_confirmations_enabled: false,
        });
        let resolver = ConfirmationResolver::new();

        for id in ["msg-1", "tx-1", "typed-1"] {
            assert_eq!(
                outcome(&resolver, &state, id),
                Outcome::Gated(GateReason::UserPreferenceDisabled)
            );
        }
        assert!(resolver.resolve_current_confirmation(&state, None).is_none());
    }

    #[test]
    fn test_developer_flag_gates_transactions_only() {
        let base = pending_confirmations().unwrap();
        let flags = FeatureFlags {
            is_redesigned_confirmations_feature_enabled: false,
            ..(*base.feature_flags).clone()
        };
        let state = base.with_feature_flags(flags);
        let resolver = ConfirmationResolver::new();

        assert_eq!(outcome(&resolver, &state, "msg-1"), Outcome::Resolved);
        assert_eq!(
            outcome(&resolver, &state, "tx-1"),
            Outcome::Gated(GateReason::DeveloperFeatureDisabled)
        );
    }

    #[test]
    fn test_chain_switch_strands_pending_transaction() {
        let state = pending_confirmations().unwrap();
        let resolver = ConfirmationResolver::new();
        assert_eq!(outcome(&resolver, &state, "tx-1"), Outcome::Resolved);

        let switched = state.with_provider_config(ProviderConfig::for_chain("0x1"));
        assert_eq!(outcome(&resolver, &switched, "tx-1"), Outcome::ChainMismatch);
        assert_eq!(outcome(&resolver, &switched, "tx-foreign"), Outcome::Resolved);
    }

    // =============================================================================
    // INTEGRATION TESTS: ACCOUNT ORDERING
    // =============================================================================

    #[test]
    fn test_remix_accounts_ordered_by_recency_then_keyring() {
        let state = remix_permissions().unwrap();
        let service = AccountOrderingService::new();

        assert_eq!(
            ordered_ids(&service, &state, REMIX),
            vec![ACCOUNT_2, ACCOUNT_1, ACCOUNT_3, LONG_NAME, ACCOUNT_4]
        );
    }

    #[test]
    fn test_shared_address_keeps_both_records() {
        let state = remix_permissions().unwrap();
        let service = AccountOrderingService::new();
        let ordered = service.get_ordered_connected_accounts(&state, REMIX);

        let shared: Vec<&str> = ordered
            .iter()
            .filter(|account| account.address == "0x0dcd5d886577d5081b0c52e242ef29e70be3e7bc")
            .map(|account| account.metadata.name.as_str())
            .collect();
        assert_eq!(shared, vec!["Account 3", "Account 4"]);
    }

    #[test]
    fn test_last_active_comes_from_history() {
        let state = remix_permissions().unwrap();
        let service = AccountOrderingService::new();

        let ordered = service.get_ordered_connected_accounts(&state, REMIX);
        assert!(ordered
            .iter()
            .all(|account| account.metadata.last_active == Some(1586359844192)));

        // The stored records are untouched.
        let stored = state.internal_accounts.accounts.get(ACCOUNT_1).unwrap();
        assert_eq!(stored.metadata.last_active, None);
    }

    #[test]
    fn test_single_address_origin() {
        let state = remix_permissions().unwrap();
        let service = AccountOrderingService::new();

        assert_eq!(ordered_ids(&service, &state, PEEPETH), vec![ACCOUNT_1]);
        assert!(ordered_ids(&service, &state, "https://unknown.example").is_empty());
    }

    #[test]
    fn test_permission_summaries() {
        let state = remix_permissions().unwrap();
        let service = AccountOrderingService::new();

        let last_connected = service.get_last_connected_info(&state);
        assert_eq!(last_connected.keys().collect::<Vec<_>>(), vec![REMIX]);
        assert_eq!(last_connected[REMIX].accounts.len(), 5);

        let tab = service.get_permissions_for_active_tab(&state);
        assert_eq!(tab.len(), 1);
        assert_eq!(tab[0].key, "eth_accounts");
        assert_eq!(tab[0].value.id, "3aa65a8b-3bcb-4944-941b-1baa5fe0ed8b");

        // Selected account 0x7250... is only on the remix allow-list.
        let subjects = service.get_connected_subjects_for_selected_address(&state);
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].origin, REMIX);
        assert_eq!(subjects[0].name.as_deref(), Some("Remix - Ethereum IDE"));
        assert_eq!(
            subjects[0].icon_url.as_deref(),
            Some("https://remix.ethereum.org/icon.png")
        );
    }

    #[test]
    fn test_connected_subjects_follow_snapshot_order() {
        let state = connected_subjects().unwrap();
        let service = AccountOrderingService::new();

        let subjects = service.get_connected_subjects_for_selected_address(&state);
        let listed: Vec<(&str, Option<&str>, Option<&str>)> = subjects
            .iter()
            .map(|subject| {
                (
                    subject.origin.as_str(),
                    subject.name.as_deref(),
                    subject.icon_url.as_deref(),
                )
            })
            .collect();
        assert_eq!(
            listed,
            vec![
                (PEEPETH, Some("Peepeth"), Some("https://peepeth.com/favicon-32x32.png")),
                (
                    REMIX,
                    Some("Remix - Ethereum IDE"),
                    Some("https://remix.ethereum.org/icon.png")
                ),
            ]
        );
        assert!(subjects.iter().all(|subject| subject.extension_id.is_none()));
    }

    // =============================================================================
    // INTEGRATION TESTS: BRIDGE ELIGIBILITY
    // =============================================================================

    #[test]
    fn test_bridge_eligible_then_stale_after_chain_switch() {
        let state = pending_confirmations().unwrap();
        let service = BridgeEligibilityService::new();
        assert!(service.is_bridge_transaction(&state));

        // Switching to the destination chain makes the pair the same chain.
        let switched = state.with_provider_config(ProviderConfig::for_chain("0x38"));
        let explained = service.explain(&switched);
        assert!(!explained.eligible);
        assert_eq!(explained.reason, BridgeReason::SameChain);
    }

    #[test]
    fn test_bridge_reasons_follow_flags_and_destination() {
        let base = pending_confirmations().unwrap();
        let service = BridgeEligibilityService::new();

        let no_destination = base.clone().with_bridge(BridgeState::default());
        assert_eq!(service.explain(&no_destination).reason, BridgeReason::NoDestination);

        let offline = base.clone().with_feature_flags(FeatureFlags {
            use_external_services: false,
            ..(*base.feature_flags).clone()
        });
        assert_eq!(
            service.explain(&offline).reason,
            BridgeReason::ExternalServicesDisabled
        );

        let disabled = base.with_feature_flags(FeatureFlags::default());
        assert_eq!(service.explain(&disabled).reason, BridgeReason::FeatureDisabled);
    }

    // =============================================================================
    // INTEGRATION TESTS: RUNTIME REPORT
    // =============================================================================

    #[test]
    fn test_report_over_full_snapshot() {
        let state = full_snapshot().unwrap();
        let runtime = DerivedStateRuntime::new();
        let report = runtime.report(&state, None, None);

        assert_eq!(report.origin.as_deref(), Some(REMIX));
        assert_eq!(report.latest_pending_approval.as_ref().unwrap().id, "typed-1");
        assert!(report.current_confirmation.outcome.is_resolved());
        assert_eq!(report.permitted_accounts.len(), 5);
        assert_eq!(report.ordered_connected_accounts[0].id, ACCOUNT_2);
        assert_eq!(report.connected_subjects.len(), 1);
        assert_eq!(report.from_chain.as_str(), "0x5");
        assert!(report.bridge.eligible);
    }

    #[test]
    fn test_report_json_shape() {
        let state = full_snapshot().unwrap();
        let runtime = DerivedStateRuntime::new();
        let report = runtime.report(&state, Some("tx-cancel"), Some(PEEPETH));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["origin"], PEEPETH);
        assert_eq!(
            value["currentConfirmation"]["outcome"]["outcome"],
            "excludedTransactionType"
        );
        assert!(value["currentConfirmation"]["confirmation"].is_null());
        assert_eq!(value["orderedConnectedAccounts"][0]["id"], ACCOUNT_1);
        assert_eq!(value["toChain"], "0x38");
        assert_eq!(value["bridge"]["reason"], "eligible");
    }
}
