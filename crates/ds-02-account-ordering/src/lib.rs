//! # DS-02: Account Ordering
//!
//! Computes, per requesting origin, the permission-scoped and
//! deterministically ordered list of accounts visible to that origin, plus
//! the per-origin permission summaries the connection screens read.
//!
//! ## Architecture
//!
//! - **Domain**: `SortKey`, `PermissionEntry`, `ConnectedSubject`, invariants
//! - **Algorithms**: allow-list extraction, ordering, summaries
//! - **Ports**: Inbound (`AccountOrderingApi`)
//! - **Application**: memoized `AccountOrderingService`
//!
//! ## Ordering
//!
//! ```text
//! subjects[origin].eth_accounts.restrictReturnedAccounts
//!        │
//!        ▼
//! allow-list ──► account records (duplicates kept) ──► + lastActive
//!                                                        │
//!                                                        ▼
//!                          stable sort: lastSelected desc, keyring asc
//! ```

#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use algorithms::{get_permitted_accounts, keyring_position, order_connected_accounts};
pub use application::service::AccountOrderingService;
pub use config::OrderingConfig;
pub use domain::value_objects::{
    ConnectedAccountsInfo, ConnectedSubject, LastConnectedInfo, PermissionEntry, SortKey,
};
pub use ports::inbound::AccountOrderingApi;

use lazy_static::lazy_static;
use shared_types::{AccountRecord, WalletState};
use std::sync::Arc;

lazy_static! {
    static ref DEFAULT_SERVICE: AccountOrderingService = AccountOrderingService::new();
}

/// Ordered accounts for `origin`, using the process-wide default service.
pub fn get_ordered_connected_accounts(state: &WalletState, origin: &str) -> Arc<Vec<AccountRecord>> {
    DEFAULT_SERVICE.get_ordered_connected_accounts(state, origin)
}

pub fn get_last_connected_info(state: &WalletState) -> Arc<LastConnectedInfo> {
    DEFAULT_SERVICE.get_last_connected_info(state)
}

pub fn get_permissions_for_active_tab(state: &WalletState) -> Arc<Vec<PermissionEntry>> {
    DEFAULT_SERVICE.get_permissions_for_active_tab(state)
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
