//! Value objects for Confirmation Resolution

use serde::Serialize;
use shared_types::ApprovalType;

/// Which resolution branch an approval type routes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmationKind {
    /// Personal-sign and typed-data requests, backed by a message record.
    Signature,
    /// Backed by a transaction record.
    Transaction,
    /// No redesigned confirmation exists for this approval type.
    Unsupported,
}

impl From<&ApprovalType> for ConfirmationKind {
    fn from(approval_type: &ApprovalType) -> Self {
        match approval_type {
            ApprovalType::PersonalSign | ApprovalType::EthSignTypedData => Self::Signature,
            ApprovalType::Transaction => Self::Transaction,
            ApprovalType::EthSign
            | ApprovalType::AddEthereumChain
            | ApprovalType::SwitchEthereumChain
            | ApprovalType::WalletRequestPermissions
            | ApprovalType::Other(_) => Self::Unsupported,
        }
    }
}

/// Why the feature gates did or did not let a confirmation through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GateReason {
    Allowed,
    /// The user has not opted into redesigned confirmations.
    UserPreferenceDisabled,
    /// Transactions additionally need the developer feature gate.
    DeveloperFeatureDisabled,
    UnsupportedType,
}

/// Single result of the gate step, shared by every branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GateDecision {
    pub allowed: bool,
    pub reason: GateReason,
}

impl GateDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: GateReason::Allowed,
        }
    }

    pub fn deny(reason: GateReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}

/// How a resolution ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome", content = "reason")]
pub enum Outcome {
    Resolved,
    /// No pending approval matched (empty queue or unknown route id).
    NoTarget,
    Gated(GateReason),
    MessageMissing,
    /// Sign-In-With-Ethereum requests are shown by a different page.
    SiweExcluded,
    TransactionMissing,
    ChainMismatch,
    NotUnapproved,
    ExcludedTransactionType,
}

impl Outcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}
