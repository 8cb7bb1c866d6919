//! Inbound Ports (Driving Ports / API)

use crate::domain::value_objects::BridgeEligibility;
use shared_types::WalletState;
use std::sync::Arc;

/// Primary Bridge Eligibility API
pub trait BridgeEligibilityApi: Send + Sync {
    /// True iff the bridge feature is enabled, a destination chain is
    /// selected, and it differs from the active chain.
    fn is_bridge_transaction(&self, state: &WalletState) -> bool;

    /// The same check with the first failing condition.
    fn explain(&self, state: &WalletState) -> Arc<BridgeEligibility>;
}
