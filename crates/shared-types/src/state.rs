//! # Wallet State Snapshot
//!
//! The read-only tree every derivation takes as input. Each slice is an
//! `Arc`; `with_*` builders replace one slice and share the rest, so an
//! updated snapshot differs from its predecessor only in the slices that
//! actually changed.

use crate::entities::{
    ActiveTab, BridgeState, FeatureFlags, InternalAccounts, KeyringGroup, PendingApproval,
    PermissionHistory, Preferences, ProviderConfig, SignableMessage, Subject, SubjectMetadata,
    TransactionRecord,
};
use crate::errors::SnapshotError;
use crate::id_map::IdMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Immutable snapshot of the wallet state tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletState {
    pub pending_approvals: Arc<IdMap<PendingApproval>>,
    pub unapproved_personal_msgs: Arc<BTreeMap<String, Arc<SignableMessage>>>,
    pub unapproved_typed_messages: Arc<BTreeMap<String, Arc<SignableMessage>>>,
    pub transactions: Arc<Vec<Arc<TransactionRecord>>>,
    pub provider_config: Arc<ProviderConfig>,
    pub preferences: Arc<Preferences>,
    pub feature_flags: Arc<FeatureFlags>,
    pub subjects: Arc<IdMap<Subject>>,
    pub subject_metadata: Arc<IdMap<SubjectMetadata>>,
    pub permission_history: Arc<PermissionHistory>,
    pub internal_accounts: Arc<InternalAccounts>,
    pub keyrings: Arc<Vec<KeyringGroup>>,
    pub active_tab: Arc<ActiveTab>,
    pub bridge: Arc<BridgeState>,
}

macro_rules! slice_builders {
    ($($method:ident => $field:ident: $ty:ty),* $(,)?) => {
        impl WalletState {
            $(
                #[doc = concat!("Returns a snapshot with `", stringify!($field), "` replaced.")]
                pub fn $method(mut self, value: $ty) -> Self {
                    self.$field = Arc::new(value);
                    self
                }
            )*
        }
    };
}

slice_builders! {
    with_pending_approvals => pending_approvals: IdMap<PendingApproval>,
    with_unapproved_personal_msgs => unapproved_personal_msgs: BTreeMap<String, Arc<SignableMessage>>,
    with_unapproved_typed_messages => unapproved_typed_messages: BTreeMap<String, Arc<SignableMessage>>,
    with_transactions => transactions: Vec<Arc<TransactionRecord>>,
    with_provider_config => provider_config: ProviderConfig,
    with_preferences => preferences: Preferences,
    with_feature_flags => feature_flags: FeatureFlags,
    with_subjects => subjects: IdMap<Subject>,
    with_subject_metadata => subject_metadata: IdMap<SubjectMetadata>,
    with_permission_history => permission_history: PermissionHistory,
    with_internal_accounts => internal_accounts: InternalAccounts,
    with_keyrings => keyrings: Vec<KeyringGroup>,
    with_active_tab => active_tab: ActiveTab,
    with_bridge => bridge: BridgeState,
}

impl WalletState {
    /// Parse a snapshot from its JSON form.
    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        let state: Self = serde_json::from_str(raw)?;
        debug!(
            pending_approvals = state.pending_approvals.len(),
            transactions = state.transactions.len(),
            subjects = state.subjects.len(),
            accounts = state.internal_accounts.accounts.len(),
            "Loaded wallet state snapshot"
        );
        Ok(state)
    }

    /// Read and parse a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Looks up a signature request in either message collection, personal
    /// messages first.
    pub fn find_message(&self, id: &str) -> Option<&Arc<SignableMessage>> {
        self.unapproved_personal_msgs
            .get(id)
            .or_else(|| self.unapproved_typed_messages.get(id))
    }

    pub fn find_transaction(&self, id: &str) -> Option<&Arc<TransactionRecord>> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn active_origin(&self) -> Option<&str> {
        self.active_tab.origin.as_deref()
    }
}
