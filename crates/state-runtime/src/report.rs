//! Derived-state report.
//!
//! Holds one service per derivation crate so repeated reports over the same
//! snapshot reuse the memoized results.

use ds_01_confirmation_resolution::{
    ConfirmationResolutionApi, ConfirmationResolver, Outcome, ResolutionTrace,
};
use ds_02_account_ordering::{
    AccountOrderingApi, AccountOrderingService, ConnectedSubject, LastConnectedInfo,
    PermissionEntry,
};
use ds_03_bridge_eligibility::{
    get_from_chain, get_to_chain, BridgeEligibility, BridgeEligibilityApi,
    BridgeEligibilityService,
};
use serde::Serialize;
use shared_types::{AccountRecord, Address, ChainId, PendingApproval, WalletState};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Every exposed derivation evaluated against one snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedReport {
    pub route_id: Option<String>,
    pub origin: Option<String>,
    pub latest_pending_approval: Option<PendingApproval>,
    pub current_confirmation: Arc<ResolutionTrace>,
    pub permitted_accounts: Arc<Vec<Address>>,
    pub ordered_connected_accounts: Arc<Vec<AccountRecord>>,
    pub last_connected_info: Arc<LastConnectedInfo>,
    pub permissions_for_active_tab: Arc<Vec<PermissionEntry>>,
    pub connected_subjects: Arc<Vec<ConnectedSubject>>,
    pub from_chain: ChainId,
    pub to_chain: Option<ChainId>,
    pub bridge: Arc<BridgeEligibility>,
}

/// The three derivation services wired together.
#[derive(Debug, Default)]
pub struct DerivedStateRuntime {
    resolver: ConfirmationResolver,
    ordering: AccountOrderingService,
    bridge: BridgeEligibilityService,
}

impl DerivedStateRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolver(&self) -> &ConfirmationResolver {
        &self.resolver
    }

    pub fn ordering(&self) -> &AccountOrderingService {
        &self.ordering
    }

    pub fn bridge(&self) -> &BridgeEligibilityService {
        &self.bridge
    }

    /// Evaluate every derivation. Accounts are ordered for `origin`, or for
    /// the active tab's origin when `origin` is `None`.
    pub fn report(
        &self,
        state: &WalletState,
        route_id: Option<&str>,
        origin: Option<&str>,
    ) -> DerivedReport {
        let origin = origin.or_else(|| state.active_origin());

        let (permitted_accounts, ordered_connected_accounts) = match origin {
            Some(origin) => (
                self.ordering.get_permitted_accounts(state, origin),
                self.ordering.get_ordered_connected_accounts(state, origin),
            ),
            None => (Arc::default(), Arc::default()),
        };

        let report = DerivedReport {
            route_id: route_id.map(str::to_string),
            origin: origin.map(str::to_string),
            latest_pending_approval: self.resolver.latest_pending_approval(state),
            current_confirmation: self.resolver.explain(state, route_id),
            permitted_accounts,
            ordered_connected_accounts,
            last_connected_info: self.ordering.get_last_connected_info(state),
            permissions_for_active_tab: self.ordering.get_permissions_for_active_tab(state),
            connected_subjects: self.ordering.get_connected_subjects_for_selected_address(state),
            from_chain: get_from_chain(state).chain_id.clone(),
            to_chain: get_to_chain(state).map(|c| c.chain_id.clone()),
            bridge: self.bridge.explain(state),
        };

        info!(
            outcome = ?report.current_confirmation.outcome,
            connected_accounts = report.ordered_connected_accounts.len(),
            bridge = report.bridge.eligible,
            "Derived state evaluated"
        );
        report
    }
}

impl fmt::Display for DerivedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confirmation")?;
        match &self.latest_pending_approval {
            Some(latest) => writeln!(
                f,
                "  latest approval:  {} ({}, t={})",
                latest.id, latest.approval_type, latest.time
            )?,
            None => writeln!(f, "  latest approval:  none")?,
        }
        if let Some(route_id) = &self.route_id {
            writeln!(f, "  route id:         {route_id}")?;
        }
        let trace = &self.current_confirmation;
        match (&trace.confirmation, trace.outcome) {
            (Some(confirmation), _) => writeln!(
                f,
                "  current:          {} ({:?})",
                confirmation.id(),
                confirmation.kind()
            )?,
            (None, Outcome::NoTarget) => writeln!(f, "  current:          none (no target)")?,
            (None, outcome) => writeln!(
                f,
                "  current:          none ({:?} for {})",
                outcome,
                trace.approval_id.as_deref().unwrap_or("?")
            )?,
        }

        writeln!(f, "Accounts")?;
        writeln!(
            f,
            "  origin:           {}",
            self.origin.as_deref().unwrap_or("none")
        )?;
        writeln!(f, "  permitted:        {}", self.permitted_accounts.join(", "))?;
        for (rank, account) in self.ordered_connected_accounts.iter().enumerate() {
            writeln!(
                f,
                "  {:>2}. {} {} [{}] lastSelected={} lastActive={}",
                rank + 1,
                account.metadata.name,
                account.address,
                account.id,
                display_time(account.metadata.last_selected),
                display_time(account.metadata.last_active),
            )?;
        }
        for (origin, info) in self.last_connected_info.iter() {
            writeln!(
                f,
                "  last connected:   {origin} ({} accounts)",
                info.accounts.len()
            )?;
        }
        let keys: Vec<&str> = self
            .permissions_for_active_tab
            .iter()
            .map(|entry| entry.key.as_str())
            .collect();
        writeln!(f, "  tab permissions:  {}", keys.join(", "))?;
        for subject in self.connected_subjects.iter() {
            writeln!(
                f,
                "  connected:        {} {}",
                subject.origin,
                subject.name.as_deref().unwrap_or("")
            )?;
        }

        writeln!(f, "Bridge")?;
        writeln!(
            f,
            "  {} -> {}: {} ({:?})",
            self.from_chain,
            self.to_chain
                .as_ref()
                .map(ChainId::as_str)
                .unwrap_or("none"),
            self.bridge.eligible,
            self.bridge.reason
        )
    }
}

fn display_time(time: Option<u64>) -> String {
    time.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
}
