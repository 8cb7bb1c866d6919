//! # Core Domain Entities
//!
//! Records owned by the external wallet subsystems. The derivation layer only
//! reads them.
//!
//! ## Clusters
//!
//! - **Approvals**: `PendingApproval`, `ApprovalType`
//! - **Signables**: `SignableMessage`, `TransactionRecord`
//! - **Network**: `ChainId`, `ProviderConfig`, `BridgeState`
//! - **Permissions**: `Subject`, `Permission`, `Caveat`, `PermissionHistoryEntry`
//! - **Accounts**: `AccountRecord`, `InternalAccounts`, `KeyringGroup`
//! - **Settings**: `Preferences`, `FeatureFlags`, `ActiveTab`

use crate::id_map::IdMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Requesting dapp origin, e.g. `https://remix.ethereum.org`.
pub type Origin = String;

/// Hex account address as stored in the state tree.
pub type Address = String;

/// Name of the account-exposure capability.
pub const ETH_ACCOUNTS: &str = "eth_accounts";

/// Caveat type carrying the origin-scoped account allow-list.
pub const RESTRICT_RETURNED_ACCOUNTS: &str = "restrictReturnedAccounts";

// =============================================================================
// CLUSTER A: APPROVALS
// =============================================================================

/// Kind of request an approval is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApprovalType {
    PersonalSign,
    EthSignTypedData,
    Transaction,
    EthSign,
    AddEthereumChain,
    SwitchEthereumChain,
    WalletRequestPermissions,
    /// Any approval type this layer does not know about.
    Other(String),
}

impl ApprovalType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::PersonalSign => "personal_sign",
            Self::EthSignTypedData => "eth_signTypedData",
            Self::Transaction => "transaction",
            Self::EthSign => "eth_sign",
            Self::AddEthereumChain => "wallet_addEthereumChain",
            Self::SwitchEthereumChain => "wallet_switchEthereumChain",
            Self::WalletRequestPermissions => "wallet_requestPermissions",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ApprovalType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "personal_sign" => Self::PersonalSign,
            "eth_signTypedData" => Self::EthSignTypedData,
            "transaction" => Self::Transaction,
            "eth_sign" => Self::EthSign,
            "wallet_addEthereumChain" => Self::AddEthereumChain,
            "wallet_switchEthereumChain" => Self::SwitchEthereumChain,
            "wallet_requestPermissions" => Self::WalletRequestPermissions,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for ApprovalType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ApprovalType> for String {
    fn from(kind: ApprovalType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ApprovalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A queued request awaiting user accept/reject.
///
/// Shares its `id` with the underlying message or transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingApproval {
    pub id: String,
    #[serde(rename = "type")]
    pub approval_type: ApprovalType,
    /// Insertion timestamp. Missing values sort as the oldest.
    #[serde(default)]
    pub time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
}

impl PendingApproval {
    pub fn new(id: impl Into<String>, approval_type: ApprovalType, time: u64) -> Self {
        Self {
            id: id.into(),
            approval_type,
            time,
            origin: None,
        }
    }
}

// =============================================================================
// CLUSTER B: SIGNABLES
// =============================================================================

/// Sign-In-With-Ethereum parse result attached by the message subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiweMetadata {
    #[serde(rename = "isSIWEMessage", default)]
    pub is_siwe_message: bool,
}

/// Parameters of a signature request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siwe: Option<SiweMetadata>,
}

/// A signature request owned by the message subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignableMessage {
    pub id: String,
    #[serde(default)]
    pub msg_params: MessageParams,
}

impl SignableMessage {
    /// True when the message subsystem flagged this as a SIWE message.
    pub fn is_siwe(&self) -> bool {
        self.msg_params
            .siwe
            .as_ref()
            .is_some_and(|siwe| siwe.is_siwe_message)
    }
}

/// Lifecycle status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionStatus {
    Unapproved,
    Approved,
    Signed,
    Submitted,
    Confirmed,
    Failed,
    Rejected,
    Dropped,
    #[serde(other)]
    Unknown,
}

/// Kind of transaction as classified by the transaction subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionType {
    Cancel,
    ContractInteraction,
    DeployContract,
    Retry,
    SimpleSend,
    Swap,
    SwapApproval,
    TokenMethodApprove,
    TokenMethodSetApprovalForAll,
    TokenMethodTransfer,
    TokenMethodTransferFrom,
    TokenMethodSafeTransferFrom,
    #[serde(other)]
    Unknown,
}

/// A transaction owned by the transaction subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub chain_id: ChainId,
    pub status: TransactionStatus,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
}

// =============================================================================
// CLUSTER C: NETWORK
// =============================================================================

/// Hex chain id, e.g. `0x1`. Compared verbatim, as the state tree stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub String);

impl ChainId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Active (or selected destination) network configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub chain_id: ChainId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
}

impl ProviderConfig {
    pub fn for_chain(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: ChainId::new(chain_id),
            ..Default::default()
        }
    }
}

/// Bridge page state: the user-selected destination network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeState {
    #[serde(default)]
    pub to_chain: Option<ProviderConfig>,
}

// =============================================================================
// CLUSTER D: PERMISSIONS
// =============================================================================

/// A restriction attached to a granted permission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caveat {
    #[serde(rename = "type")]
    pub caveat_type: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Caveat {
    /// Reads the caveat value as a list of addresses. Non-string entries and
    /// non-array values are ignored.
    pub fn addresses(&self) -> Vec<Address> {
        self.value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A capability granted to an origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[serde(default)]
    pub caveats: Vec<Caveat>,
    #[serde(default)]
    pub date: u64,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub invoker: Origin,
    #[serde(default)]
    pub parent_capability: String,
}

impl Permission {
    pub fn caveat(&self, caveat_type: &str) -> Option<&Caveat> {
        self.caveats.iter().find(|c| c.caveat_type == caveat_type)
    }
}

/// Permission record for one origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(default)]
    pub permissions: BTreeMap<String, Permission>,
}

/// Display metadata for an origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub extension_id: Option<String>,
}

/// Per-capability history entry for one origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionHistoryEntry {
    /// Address -> last time it was exposed to the origin.
    #[serde(default)]
    pub accounts: BTreeMap<Address, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_approved: Option<u64>,
}

/// Origin -> capability name -> history.
pub type PermissionHistory = BTreeMap<Origin, BTreeMap<String, PermissionHistoryEntry>>;

// =============================================================================
// CLUSTER E: ACCOUNTS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyringInfo {
    #[serde(rename = "type")]
    pub keyring_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_selected: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<u64>,
    #[serde(default)]
    pub keyring: KeyringInfo,
}

/// An account managed by the keyring subsystem.
///
/// Identity is `id`; two records may share an `address`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: String,
    pub address: Address,
    #[serde(default)]
    pub metadata: AccountMetadata,
    #[serde(default)]
    pub options: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(rename = "type", default)]
    pub account_type: String,
}

/// Account map plus the currently selected account id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalAccounts {
    #[serde(default)]
    pub accounts: IdMap<Arc<AccountRecord>>,
    #[serde(default)]
    pub selected_account: String,
}

impl InternalAccounts {
    pub fn selected(&self) -> Option<&Arc<AccountRecord>> {
        self.accounts.get(&self.selected_account)
    }
}

/// A custody group listing its managed addresses in keyring order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyringGroup {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub keyring_type: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Address>,
}

// =============================================================================
// CLUSTER F: SETTINGS
// =============================================================================

/// User preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub redesigned_confirmations_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeFeatureFlags {
    #[serde(default)]
    pub extension_support: bool,
}

/// Build-time and remote feature flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    /// Developer gate for redesigned transaction confirmations.
    #[serde(default)]
    pub is_redesigned_confirmations_feature_enabled: bool,
    /// Global opt-in for features that call third-party services.
    #[serde(default)]
    pub use_external_services: bool,
    #[serde(default)]
    pub bridge_feature_flags: BridgeFeatureFlags,
}

/// The browser tab the wallet popup was opened from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTab {
    #[serde(default)]
    pub origin: Option<Origin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}
