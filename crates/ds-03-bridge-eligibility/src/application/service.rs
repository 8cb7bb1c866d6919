//! Bridge Eligibility Service
//!
//! Memoized on the provider configuration, the bridge slice and the feature
//! flags. A chain switch replaces the provider configuration `Arc`, so a
//! cached result never outlives the chains it was computed for.

use crate::algorithms::evaluate_bridge;
use crate::domain::value_objects::BridgeEligibility;
use crate::ports::inbound::BridgeEligibilityApi;
use shared_selectors::{Selector, SelectorStats};
use shared_types::{BridgeState, FeatureFlags, ProviderConfig, WalletState};
use std::sync::Arc;
use tracing::debug;

type BridgeDeps = (Arc<ProviderConfig>, Arc<BridgeState>, Arc<FeatureFlags>);

/// Memoized bridge eligibility check.
#[derive(Debug)]
pub struct BridgeEligibilityService {
    eligibility: Selector<BridgeDeps, BridgeEligibility>,
}

impl BridgeEligibilityService {
    pub fn new() -> Self {
        Self {
            eligibility: Selector::new("is_bridge_transaction"),
        }
    }

    pub fn stats(&self) -> SelectorStats {
        self.eligibility.stats()
    }
}

impl Default for BridgeEligibilityService {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeEligibilityApi for BridgeEligibilityService {
    fn is_bridge_transaction(&self, state: &WalletState) -> bool {
        self.explain(state).eligible
    }

    fn explain(&self, state: &WalletState) -> Arc<BridgeEligibility> {
        let deps = (
            Arc::clone(&state.provider_config),
            Arc::clone(&state.bridge),
            Arc::clone(&state.feature_flags),
        );

        self.eligibility.select(deps, |(from, bridge, flags)| {
            let result = evaluate_bridge(from, bridge.to_chain.as_ref(), flags);
            debug!(
                from_chain = %from.chain_id,
                to_chain = ?bridge.to_chain.as_ref().map(|c| c.chain_id.as_str()),
                reason = ?result.reason,
                "Evaluated bridge eligibility"
            );
            result
        })
    }
}
