//! Value objects for Bridge Eligibility

use serde::Serialize;

/// First condition that failed, or `Eligible`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BridgeReason {
    Eligible,
    /// The bridge feature flag is off for this extension.
    FeatureDisabled,
    /// The user has not opted into third-party services.
    ExternalServicesDisabled,
    NoDestination,
    SameChain,
}

/// Outcome of the bridge check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BridgeEligibility {
    pub eligible: bool,
    pub reason: BridgeReason,
}

impl BridgeEligibility {
    pub fn eligible() -> Self {
        Self {
            eligible: true,
            reason: BridgeReason::Eligible,
        }
    }

    pub fn ineligible(reason: BridgeReason) -> Self {
        Self {
            eligible: false,
            reason,
        }
    }
}
