//! Account Ordering Service
//!
//! Main service implementing `AccountOrderingApi`.
//!
//! The allow-list selector feeds the ordering selector. It hands back its
//! previous `Arc` when a new `subjects` slice yields an equal allow-list, so
//! a change to an unrelated subject still reuses the ordering.

use crate::algorithms::{
    connected_subjects_for_address, get_permitted_accounts, last_connected_info,
    order_connected_accounts, permissions_for_origin, OrderingInputs,
};
use crate::config::OrderingConfig;
use crate::domain::invariants::{invariant_one_entry_per_record, invariant_ordered, invariant_scoped};
use crate::domain::value_objects::{ConnectedSubject, LastConnectedInfo, PermissionEntry};
use crate::ports::inbound::AccountOrderingApi;
use shared_selectors::{Selector, SelectorStats};
use shared_types::{
    AccountRecord, Address, IdMap, InternalAccounts, KeyringGroup, PermissionHistory, Subject,
    SubjectMetadata, WalletState,
};
use std::sync::Arc;
use tracing::debug;

type SubjectsSlice = Arc<IdMap<Subject>>;
type OrderingDeps = (
    Arc<Vec<Address>>,
    Arc<InternalAccounts>,
    Arc<Vec<KeyringGroup>>,
    Arc<PermissionHistory>,
    String,
);
type SubjectsDeps = (
    SubjectsSlice,
    Arc<IdMap<SubjectMetadata>>,
    Arc<InternalAccounts>,
);

/// Memoized account ordering service.
pub struct AccountOrderingService {
    config: OrderingConfig,
    permitted: Selector<(SubjectsSlice, String), Vec<Address>>,
    ordered: Selector<OrderingDeps, Vec<AccountRecord>>,
    last_connected: Selector<Arc<PermissionHistory>, LastConnectedInfo>,
    tab_permissions: Selector<(SubjectsSlice, String), Vec<PermissionEntry>>,
    connected_subjects: Selector<SubjectsDeps, Vec<ConnectedSubject>>,
}

impl AccountOrderingService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self::with_config(OrderingConfig::default())
    }

    /// Create a new service with custom config
    pub fn with_config(config: OrderingConfig) -> Self {
        Self {
            config,
            permitted: Selector::new("permitted_accounts"),
            ordered: Selector::new("ordered_connected_accounts"),
            last_connected: Selector::new("last_connected_info"),
            tab_permissions: Selector::new("permissions_for_active_tab"),
            connected_subjects: Selector::new("connected_subjects_for_selected_address"),
        }
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Usage counters of the allow-list and ordering selectors.
    pub fn stats(&self) -> (SelectorStats, SelectorStats) {
        (self.permitted.stats(), self.ordered.stats())
    }
}

impl Default for AccountOrderingService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AccountOrderingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountOrderingService")
            .field("config", &self.config)
            .field("permitted", &self.permitted)
            .field("ordered", &self.ordered)
            .finish_non_exhaustive()
    }
}

impl AccountOrderingApi for AccountOrderingService {
    fn get_permitted_accounts(&self, state: &WalletState, origin: &str) -> Arc<Vec<Address>> {
        self.permitted.select_reusing_equal(
            (Arc::clone(&state.subjects), origin.to_string()),
            |(subjects, origin)| get_permitted_accounts(subjects, origin, &self.config),
        )
    }

    fn get_ordered_connected_accounts(
        &self,
        state: &WalletState,
        origin: &str,
    ) -> Arc<Vec<AccountRecord>> {
        let deps = (
            self.get_permitted_accounts(state, origin),
            Arc::clone(&state.internal_accounts),
            Arc::clone(&state.keyrings),
            Arc::clone(&state.permission_history),
            origin.to_string(),
        );

        self.ordered
            .select(deps, |(permitted, accounts, keyrings, history, origin)| {
                let inputs = OrderingInputs {
                    permitted,
                    accounts,
                    keyrings,
                    history,
                };
                let ordered = order_connected_accounts(&inputs, origin, &self.config);

                debug_assert!(invariant_scoped(&ordered, permitted));
                debug_assert!(invariant_ordered(&ordered, keyrings));
                debug_assert!(invariant_one_entry_per_record(&ordered, permitted, accounts));

                debug!(
                    origin = %origin,
                    permitted = permitted.len(),
                    connected = ordered.len(),
                    "Ordered connected accounts"
                );
                ordered
            })
    }

    fn get_ordered_connected_accounts_for_active_tab(
        &self,
        state: &WalletState,
    ) -> Arc<Vec<AccountRecord>> {
        let origin = state.active_origin().unwrap_or_default();
        self.get_ordered_connected_accounts(state, origin)
    }

    fn get_last_connected_info(&self, state: &WalletState) -> Arc<LastConnectedInfo> {
        self.last_connected
            .select(Arc::clone(&state.permission_history), |history| {
                last_connected_info(history, &self.config)
            })
    }

    fn get_permissions_for_active_tab(&self, state: &WalletState) -> Arc<Vec<PermissionEntry>> {
        let origin = state.active_origin().unwrap_or_default().to_string();
        self.tab_permissions
            .select((Arc::clone(&state.subjects), origin), |(subjects, origin)| {
                permissions_for_origin(subjects, origin)
            })
    }

    fn get_connected_subjects_for_selected_address(
        &self,
        state: &WalletState,
    ) -> Arc<Vec<ConnectedSubject>> {
        let deps = (
            Arc::clone(&state.subjects),
            Arc::clone(&state.subject_metadata),
            Arc::clone(&state.internal_accounts),
        );

        self.connected_subjects
            .select(deps, |(subjects, metadata, accounts)| {
                match accounts.selected() {
                    Some(selected) => connected_subjects_for_address(
                        subjects,
                        metadata,
                        &selected.address,
                        &self.config,
                    ),
                    None => {
                        debug!(
                            selected_account = %accounts.selected_account,
                            "Selected account not found"
                        );
                        Vec::new()
                    }
                }
            })
    }
}
