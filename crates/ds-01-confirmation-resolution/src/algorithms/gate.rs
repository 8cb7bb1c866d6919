//! Gate Evaluation
//!
//! All feature-flag checks for both branches live here and produce one
//! `GateDecision`.

use crate::domain::value_objects::{ConfirmationKind, GateDecision, GateReason};
use shared_types::{FeatureFlags, Preferences};

/// Evaluate the confirmation gates for an approval kind.
///
/// The user preference gates everything. Transactions also need the
/// developer gate. Unsupported kinds never pass.
pub fn evaluate_gate(
    kind: ConfirmationKind,
    preferences: &Preferences,
    feature_flags: &FeatureFlags,
) -> GateDecision {
    if !preferences.redesigned_confirmations_enabled {
        return GateDecision::deny(GateReason::UserPreferenceDisabled);
    }

    match kind {
        ConfirmationKind::Signature => GateDecision::allow(),
        ConfirmationKind::Transaction if feature_flags.is_redesigned_confirmations_feature_enabled => {
            GateDecision::allow()
        }
        ConfirmationKind::Transaction => GateDecision::deny(GateReason::DeveloperFeatureDisabled),
        ConfirmationKind::Unsupported => GateDecision::deny(GateReason::UnsupportedType),
    }
}
