//! Value objects for Account Ordering

use serde::Serialize;
use shared_types::{Address, Origin, Permission};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Ordering key of one connected account.
///
/// Orders by `last_selected` descending with never-selected accounts last,
/// then by keyring position ascending. Accounts missing from every keyring
/// carry `usize::MAX` and sort after all keyring-listed ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub last_selected: Option<u64>,
    pub keyring_position: usize,
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let recency = match (self.last_selected, other.last_selected) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        recency.then(self.keyring_position.cmp(&other.keyring_position))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One capability granted to the active origin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PermissionEntry {
    pub key: String,
    pub value: Permission,
}

/// Accounts last exposed to one origin, with the time of exposure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConnectedAccountsInfo {
    pub accounts: BTreeMap<Address, u64>,
}

/// Origin -> accounts last exposed to it.
pub type LastConnectedInfo = BTreeMap<Origin, ConnectedAccountsInfo>;

/// A subject the selected account is exposed to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedSubject {
    pub origin: Origin,
    pub name: Option<String>,
    pub icon_url: Option<String>,
    pub extension_id: Option<String>,
}
