//! Confirmation Resolution Service
//!
//! Main service implementing `ConfirmationResolutionApi`. Two selectors are
//! chained: the target selector reads only the approval queue and the route
//! id, and the resolution selector reads the chosen target plus the six
//! slices dispatch looks at. A snapshot that changes none of those returns
//! the previous trace unchanged.

use crate::algorithms::{latest_pending_approval, resolve_target, select_target, ResolutionInputs};
use crate::config::ResolverConfig;
use crate::domain::entities::{Confirmation, ResolutionTrace};
use crate::domain::invariants::{
    invariant_matches_target, invariant_no_siwe, invariant_transaction_actionable,
    invariant_user_gate_respected,
};
use crate::ports::inbound::ConfirmationResolutionApi;
use shared_selectors::{Selector, SelectorStats};
use shared_types::{
    FeatureFlags, IdMap, PendingApproval, Preferences, ProviderConfig, SignableMessage,
    TransactionRecord, WalletState,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

type MessageSlice = Arc<BTreeMap<String, Arc<SignableMessage>>>;
type TargetDeps = (Arc<IdMap<PendingApproval>>, Option<String>);
type ResolutionDeps = (
    Arc<Option<PendingApproval>>,
    (MessageSlice, MessageSlice, Arc<Vec<Arc<TransactionRecord>>>),
    (Arc<ProviderConfig>, Arc<Preferences>, Arc<FeatureFlags>),
);

/// Memoized confirmation resolver.
pub struct ConfirmationResolver {
    config: ResolverConfig,
    latest: Selector<Arc<IdMap<PendingApproval>>, Option<PendingApproval>>,
    target: Selector<TargetDeps, Option<PendingApproval>>,
    resolution: Selector<ResolutionDeps, ResolutionTrace>,
}

impl ConfirmationResolver {
    /// Create a resolver with default config
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Create a resolver with custom config
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            config,
            latest: Selector::new("latest_pending_approval"),
            target: Selector::new("confirmation_target"),
            resolution: Selector::new("current_confirmation"),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Usage counters of the target and resolution selectors.
    pub fn stats(&self) -> (SelectorStats, SelectorStats) {
        (self.target.stats(), self.resolution.stats())
    }

    fn trace(&self, state: &WalletState, route_id: Option<&str>) -> Arc<ResolutionTrace> {
        let target = self.target.select(
            (
                Arc::clone(&state.pending_approvals),
                route_id.map(str::to_string),
            ),
            |(approvals, route_id)| select_target(approvals, route_id.as_deref()).cloned(),
        );

        let deps = (
            target,
            (
                Arc::clone(&state.unapproved_personal_msgs),
                Arc::clone(&state.unapproved_typed_messages),
                Arc::clone(&state.transactions),
            ),
            (
                Arc::clone(&state.provider_config),
                Arc::clone(&state.preferences),
                Arc::clone(&state.feature_flags),
            ),
        );

        self.resolution.select(
            deps,
            |(target, (personal, typed, transactions), (provider, preferences, flags))| {
                let target = (**target).as_ref();
                let inputs = ResolutionInputs {
                    personal_msgs: personal,
                    typed_messages: typed,
                    transactions,
                    provider_config: provider,
                    preferences,
                    feature_flags: flags,
                };
                let trace = resolve_target(target, &inputs, &self.config);

                debug_assert!(invariant_user_gate_respected(&trace, preferences));
                debug_assert!(invariant_no_siwe(&trace));
                debug_assert!(invariant_transaction_actionable(
                    &trace,
                    provider,
                    flags,
                    &self.config
                ));
                debug_assert!(invariant_matches_target(&trace, target));

                if !trace.outcome.is_resolved() {
                    debug!(
                        approval_id = ?trace.approval_id,
                        outcome = ?trace.outcome,
                        "No confirmation resolved"
                    );
                }
                trace
            },
        )
    }
}

impl Default for ConfirmationResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfirmationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmationResolver")
            .field("config", &self.config)
            .field("target", &self.target)
            .field("resolution", &self.resolution)
            .finish()
    }
}

impl ConfirmationResolutionApi for ConfirmationResolver {
    fn resolve_current_confirmation(
        &self,
        state: &WalletState,
        route_id: Option<&str>,
    ) -> Option<Confirmation> {
        self.trace(state, route_id).confirmation.clone()
    }

    fn explain(&self, state: &WalletState, route_id: Option<&str>) -> Arc<ResolutionTrace> {
        self.trace(state, route_id)
    }

    fn latest_pending_approval(&self, state: &WalletState) -> Option<PendingApproval> {
        let latest = self
            .latest
            .select(Arc::clone(&state.pending_approvals), |approvals| {
                latest_pending_approval(approvals).cloned()
            });
        (*latest).clone()
    }
}
