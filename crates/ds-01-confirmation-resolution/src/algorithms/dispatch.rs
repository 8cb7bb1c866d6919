//! Type Dispatch
//!
//! Routes a gated approval to the message or transaction branch and applies
//! the branch-specific checks. Every failed check yields an absent trace that
//! records the reason.

use super::gate::evaluate_gate;
use super::target::select_target;
use crate::config::ResolverConfig;
use crate::domain::entities::{Confirmation, ResolutionTrace};
use crate::domain::value_objects::{ConfirmationKind, GateReason, Outcome};
use shared_types::{
    FeatureFlags, PendingApproval, Preferences, ProviderConfig, SignableMessage, TransactionRecord,
    TransactionStatus, WalletState,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The slices of the state a resolution reads once its target is known.
#[derive(Clone, Copy, Debug)]
pub struct ResolutionInputs<'a> {
    pub personal_msgs: &'a BTreeMap<String, Arc<SignableMessage>>,
    pub typed_messages: &'a BTreeMap<String, Arc<SignableMessage>>,
    pub transactions: &'a [Arc<TransactionRecord>],
    pub provider_config: &'a ProviderConfig,
    pub preferences: &'a Preferences,
    pub feature_flags: &'a FeatureFlags,
}

impl<'a> ResolutionInputs<'a> {
    pub fn from_state(state: &'a WalletState) -> Self {
        Self {
            personal_msgs: &state.unapproved_personal_msgs,
            typed_messages: &state.unapproved_typed_messages,
            transactions: &state.transactions,
            provider_config: &state.provider_config,
            preferences: &state.preferences,
            feature_flags: &state.feature_flags,
        }
    }

    fn find_message(&self, id: &str) -> Option<&'a Arc<SignableMessage>> {
        self.personal_msgs
            .get(id)
            .or_else(|| self.typed_messages.get(id))
    }

    fn find_transaction(&self, id: &str) -> Option<&'a Arc<TransactionRecord>> {
        self.transactions.iter().find(|tx| tx.id == id)
    }
}

/// SIWE messages are excluded from this resolution path.
pub fn is_siwe_message(message: &SignableMessage) -> bool {
    message.is_siwe()
}

/// Resolve against a full snapshot without memoization.
pub fn resolve(
    state: &WalletState,
    route_id: Option<&str>,
    config: &ResolverConfig,
) -> ResolutionTrace {
    let target = select_target(&state.pending_approvals, route_id);
    resolve_target(target, &ResolutionInputs::from_state(state), config)
}

/// Resolve an already selected target approval.
pub fn resolve_target(
    target: Option<&PendingApproval>,
    inputs: &ResolutionInputs<'_>,
    config: &ResolverConfig,
) -> ResolutionTrace {
    let Some(approval) = target else {
        return ResolutionTrace::no_target();
    };

    let kind = ConfirmationKind::from(&approval.approval_type);
    let gate = evaluate_gate(kind, inputs.preferences, inputs.feature_flags);
    if !gate.allowed {
        return ResolutionTrace::absent(&approval.id, kind, Outcome::Gated(gate.reason));
    }

    match kind {
        ConfirmationKind::Signature => resolve_message(approval, inputs),
        ConfirmationKind::Transaction => resolve_transaction(approval, inputs, config),
        ConfirmationKind::Unsupported => ResolutionTrace::absent(
            &approval.id,
            kind,
            Outcome::Gated(GateReason::UnsupportedType),
        ),
    }
}

fn resolve_message(approval: &PendingApproval, inputs: &ResolutionInputs<'_>) -> ResolutionTrace {
    let kind = ConfirmationKind::Signature;

    let Some(message) = inputs.find_message(&approval.id) else {
        return ResolutionTrace::absent(&approval.id, kind, Outcome::MessageMissing);
    };

    if is_siwe_message(message) {
        return ResolutionTrace::absent(&approval.id, kind, Outcome::SiweExcluded);
    }

    ResolutionTrace::resolved(Confirmation::Signature(Arc::clone(message)))
}

fn resolve_transaction(
    approval: &PendingApproval,
    inputs: &ResolutionInputs<'_>,
    config: &ResolverConfig,
) -> ResolutionTrace {
    let kind = ConfirmationKind::Transaction;

    let Some(tx) = inputs.find_transaction(&approval.id) else {
        return ResolutionTrace::absent(&approval.id, kind, Outcome::TransactionMissing);
    };

    if tx.chain_id != inputs.provider_config.chain_id {
        return ResolutionTrace::absent(&approval.id, kind, Outcome::ChainMismatch);
    }

    if tx.status != TransactionStatus::Unapproved {
        return ResolutionTrace::absent(&approval.id, kind, Outcome::NotUnapproved);
    }

    if tx.tx_type.is_some_and(|t| config.is_excluded(t)) {
        return ResolutionTrace::absent(&approval.id, kind, Outcome::ExcludedTransactionType);
    }

    ResolutionTrace::resolved(Confirmation::Transaction(Arc::clone(tx)))
}
