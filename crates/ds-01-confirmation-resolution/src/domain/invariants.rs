//! Domain invariants for Confirmation Resolution
//!
//! A wrong non-absent confirmation is worse than none, so each invariant
//! states a condition every *resolved* trace must satisfy. Absent traces
//! satisfy all of them trivially.

use super::entities::{Confirmation, ResolutionTrace};
use crate::config::ResolverConfig;
use shared_types::{FeatureFlags, PendingApproval, Preferences, ProviderConfig, TransactionStatus};

/// INVARIANT-1: User Gate
/// Nothing resolves while the user preference is off.
pub fn invariant_user_gate_respected(trace: &ResolutionTrace, preferences: &Preferences) -> bool {
    trace.confirmation.is_none() || preferences.redesigned_confirmations_enabled
}

/// INVARIANT-2: SIWE Exclusion
/// A Sign-In-With-Ethereum message never resolves.
pub fn invariant_no_siwe(trace: &ResolutionTrace) -> bool {
    match &trace.confirmation {
        Some(Confirmation::Signature(message)) => !message.is_siwe(),
        _ => true,
    }
}

/// INVARIANT-3: Actionable Transaction
/// A resolved transaction is unapproved, on the active chain, of a
/// non-excluded type, and the developer gate is on.
pub fn invariant_transaction_actionable(
    trace: &ResolutionTrace,
    provider_config: &ProviderConfig,
    feature_flags: &FeatureFlags,
    config: &ResolverConfig,
) -> bool {
    let Some(Confirmation::Transaction(tx)) = &trace.confirmation else {
        return true;
    };

    tx.status == TransactionStatus::Unapproved
        && tx.chain_id == provider_config.chain_id
        && !tx.tx_type.is_some_and(|t| config.is_excluded(t))
        && feature_flags.is_redesigned_confirmations_feature_enabled
}

/// INVARIANT-4: Target Identity
/// The resolved entity shares its id with the targeted approval.
pub fn invariant_matches_target(trace: &ResolutionTrace, target: Option<&PendingApproval>) -> bool {
    match (&trace.confirmation, target) {
        (Some(confirmation), Some(approval)) => confirmation.id() == approval.id,
        (Some(_), None) => false,
        (None, _) => true,
    }
}
