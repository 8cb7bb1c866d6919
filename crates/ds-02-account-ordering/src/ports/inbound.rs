//! Inbound Ports (Driving Ports / API)
//!
//! Every method is total: a missing origin, permission or account yields an
//! empty result. Results are shared `Arc`s so repeated calls on an unchanged
//! snapshot return the same allocation.

use crate::domain::value_objects::{ConnectedSubject, LastConnectedInfo, PermissionEntry};
use shared_types::{AccountRecord, Address, WalletState};
use std::sync::Arc;

/// Primary Account Ordering API
pub trait AccountOrderingApi: Send + Sync {
    /// Raw allow-list of `origin`.
    fn get_permitted_accounts(&self, state: &WalletState, origin: &str) -> Arc<Vec<Address>>;

    /// Accounts exposed to `origin`, enriched with `lastActive` and sorted
    /// by selection recency, then keyring order.
    fn get_ordered_connected_accounts(
        &self,
        state: &WalletState,
        origin: &str,
    ) -> Arc<Vec<AccountRecord>>;

    /// `get_ordered_connected_accounts` for the active tab's origin.
    fn get_ordered_connected_accounts_for_active_tab(
        &self,
        state: &WalletState,
    ) -> Arc<Vec<AccountRecord>>;

    fn get_last_connected_info(&self, state: &WalletState) -> Arc<LastConnectedInfo>;

    fn get_permissions_for_active_tab(&self, state: &WalletState) -> Arc<Vec<PermissionEntry>>;

    /// Subjects the selected account is exposed to.
    fn get_connected_subjects_for_selected_address(
        &self,
        state: &WalletState,
    ) -> Arc<Vec<ConnectedSubject>>;
}
