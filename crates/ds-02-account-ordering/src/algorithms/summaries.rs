//! Per-origin permission summaries.

use super::permitted::{addresses_match, subject_permitted_accounts};
use crate::config::OrderingConfig;
use crate::domain::value_objects::{
    ConnectedAccountsInfo, ConnectedSubject, LastConnectedInfo, PermissionEntry,
};
use shared_types::{IdMap, PermissionHistory, Subject, SubjectMetadata};

/// Accounts last exposed to each origin.
///
/// Origins without an `eth_accounts` history entry are left out, and other
/// capability keys are never surfaced.
pub fn last_connected_info(history: &PermissionHistory, config: &OrderingConfig) -> LastConnectedInfo {
    history
        .iter()
        .filter_map(|(origin, capabilities)| {
            capabilities
                .get(&config.eth_accounts_capability)
                .map(|entry| {
                    (
                        origin.clone(),
                        ConnectedAccountsInfo {
                            accounts: entry.accounts.clone(),
                        },
                    )
                })
        })
        .collect()
}

/// Every capability granted to `origin` as a `{key, value}` pair.
pub fn permissions_for_origin(
    subjects: &IdMap<Subject>,
    origin: &str,
) -> Vec<PermissionEntry> {
    subjects
        .get(origin)
        .map(|subject| {
            subject
                .permissions
                .iter()
                .map(|(key, value)| PermissionEntry {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Subjects whose allow-list contains `address`, in the order the state
/// lists them.
pub fn connected_subjects_for_address(
    subjects: &IdMap<Subject>,
    metadata: &IdMap<SubjectMetadata>,
    address: &str,
    config: &OrderingConfig,
) -> Vec<ConnectedSubject> {
    subjects
        .iter()
        .filter(|(_, subject)| {
            subject_permitted_accounts(subject, config)
                .iter()
                .any(|permitted| addresses_match(permitted, address))
        })
        .map(|(origin, _)| {
            let meta = metadata.get(origin);
            ConnectedSubject {
                origin: origin.to_string(),
                name: meta.and_then(|m| m.name.clone()),
                icon_url: meta.and_then(|m| m.icon_url.clone()),
                extension_id: meta.and_then(|m| m.extension_id.clone()),
            }
        })
        .collect()
}
