//! # DS-03: Bridge Eligibility
//!
//! Decides whether the user is composing a chain-to-chain bridge
//! transaction, from the active network and the independently stored
//! destination chain.

#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod domain;
pub mod ports;

pub use algorithms::{evaluate_bridge, get_from_chain, get_to_chain, is_bridge_enabled};
pub use application::service::BridgeEligibilityService;
pub use domain::value_objects::{BridgeEligibility, BridgeReason};
pub use ports::inbound::BridgeEligibilityApi;

use lazy_static::lazy_static;
use shared_types::WalletState;

lazy_static! {
    static ref DEFAULT_SERVICE: BridgeEligibilityService = BridgeEligibilityService::new();
}

/// Bridge check with the process-wide default service.
pub fn is_bridge_transaction(state: &WalletState) -> bool {
    DEFAULT_SERVICE.is_bridge_transaction(state)
}
