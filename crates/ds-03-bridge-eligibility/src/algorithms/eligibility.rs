//! Bridge eligibility
//!
//! A bridge transaction is being composed when the bridge feature is on, a
//! destination chain has been picked, and it differs from the active chain.
//! Conditions are checked in that order and the first failure is reported.

use crate::domain::value_objects::{BridgeEligibility, BridgeReason};
use shared_types::{FeatureFlags, ProviderConfig, WalletState};

/// Source chain: the active network provider configuration.
pub fn get_from_chain(state: &WalletState) -> &ProviderConfig {
    &state.provider_config
}

/// Destination chain picked in the bridge form, if any.
pub fn get_to_chain(state: &WalletState) -> Option<&ProviderConfig> {
    state.bridge.to_chain.as_ref()
}

/// Bridge feature flag AND the external-services opt-in.
pub fn is_bridge_enabled(flags: &FeatureFlags) -> bool {
    flags.bridge_feature_flags.extension_support && flags.use_external_services
}

pub fn evaluate_bridge(
    from_chain: &ProviderConfig,
    to_chain: Option<&ProviderConfig>,
    flags: &FeatureFlags,
) -> BridgeEligibility {
    if !flags.bridge_feature_flags.extension_support {
        return BridgeEligibility::ineligible(BridgeReason::FeatureDisabled);
    }
    if !flags.use_external_services {
        return BridgeEligibility::ineligible(BridgeReason::ExternalServicesDisabled);
    }

    match to_chain {
        None => BridgeEligibility::ineligible(BridgeReason::NoDestination),
        Some(to) if to.chain_id == from_chain.chain_id => {
            BridgeEligibility::ineligible(BridgeReason::SameChain)
        }
        Some(_) => BridgeEligibility::eligible(),
    }
}
