//! Configuration for Account Ordering

use serde::{Deserialize, Serialize};
use shared_types::{ETH_ACCOUNTS, RESTRICT_RETURNED_ACCOUNTS};

/// Names the permission records are keyed by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Capability that exposes accounts to an origin.
    pub eth_accounts_capability: String,
    /// Caveat on that capability holding the address allow-list.
    pub restrict_returned_accounts_caveat: String,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            eth_accounts_capability: ETH_ACCOUNTS.to_string(),
            restrict_returned_accounts_caveat: RESTRICT_RETURNED_ACCOUNTS.to_string(),
        }
    }
}
