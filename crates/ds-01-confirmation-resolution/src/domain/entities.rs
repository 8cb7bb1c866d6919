//! Core entities for Confirmation Resolution

use super::value_objects::{ConfirmationKind, Outcome};
use serde::Serialize;
use shared_types::{SignableMessage, TransactionRecord};
use std::sync::Arc;

/// The entity a user is asked to confirm.
///
/// Holds the same `Arc` the state snapshot holds, so the resolved record is
/// reference-equal to the stored one.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Confirmation {
    Signature(Arc<SignableMessage>),
    Transaction(Arc<TransactionRecord>),
}

impl Confirmation {
    pub fn id(&self) -> &str {
        match self {
            Self::Signature(message) => &message.id,
            Self::Transaction(tx) => &tx.id,
        }
    }

    pub fn kind(&self) -> ConfirmationKind {
        match self {
            Self::Signature(_) => ConfirmationKind::Signature,
            Self::Transaction(_) => ConfirmationKind::Transaction,
        }
    }

    pub fn as_message(&self) -> Option<&Arc<SignableMessage>> {
        match self {
            Self::Signature(message) => Some(message),
            Self::Transaction(_) => None,
        }
    }

    pub fn as_transaction(&self) -> Option<&Arc<TransactionRecord>> {
        match self {
            Self::Transaction(tx) => Some(tx),
            Self::Signature(_) => None,
        }
    }
}

/// Full account of one resolution: what was targeted and why it did or did
/// not resolve.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionTrace {
    pub approval_id: Option<String>,
    pub kind: Option<ConfirmationKind>,
    pub outcome: Outcome,
    pub confirmation: Option<Confirmation>,
}

impl ResolutionTrace {
    pub fn no_target() -> Self {
        Self {
            approval_id: None,
            kind: None,
            outcome: Outcome::NoTarget,
            confirmation: None,
        }
    }

    pub fn absent(approval_id: &str, kind: ConfirmationKind, outcome: Outcome) -> Self {
        Self {
            approval_id: Some(approval_id.to_string()),
            kind: Some(kind),
            outcome,
            confirmation: None,
        }
    }

    pub fn resolved(confirmation: Confirmation) -> Self {
        Self {
            approval_id: Some(confirmation.id().to_string()),
            kind: Some(confirmation.kind()),
            outcome: Outcome::Resolved,
            confirmation: Some(confirmation),
        }
    }
}
