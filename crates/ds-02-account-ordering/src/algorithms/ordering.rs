//! Account Ordering
//!
//! Resolves an origin's allow-list to account records, stamps each copy with
//! the time the address was last exposed to that origin, and sorts the copies
//! by selection recency and keyring order.
//!
//! ## Algorithm
//!
//! 1. Walk the allow-list in caveat order, skipping repeated addresses.
//! 2. For each address, take every account record with that address, in
//!    account-map order. Two records sharing an address yield two entries.
//! 3. Copy each record and set `metadata.last_active` from the origin's
//!    `eth_accounts` history when the address is listed there.
//! 4. Stable sort by [`SortKey`].

use super::permitted::addresses_match;
use crate::config::OrderingConfig;
use crate::domain::value_objects::SortKey;
use shared_types::{
    AccountRecord, Address, InternalAccounts, KeyringGroup, PermissionHistory,
    PermissionHistoryEntry,
};

/// The slices an ordering reads once the allow-list is known.
#[derive(Clone, Copy, Debug)]
pub struct OrderingInputs<'a> {
    pub permitted: &'a [Address],
    pub accounts: &'a InternalAccounts,
    pub keyrings: &'a [KeyringGroup],
    pub history: &'a PermissionHistory,
}

/// Position of `address` in the concatenated keyring sequence, or
/// `usize::MAX` when no keyring lists it.
pub fn keyring_position(keyrings: &[KeyringGroup], address: &str) -> usize {
    keyrings
        .iter()
        .flat_map(|group| group.accounts.iter())
        .position(|listed| addresses_match(listed, address))
        .unwrap_or(usize::MAX)
}

pub fn sort_key(account: &AccountRecord, keyrings: &[KeyringGroup]) -> SortKey {
    SortKey {
        last_selected: account.metadata.last_selected,
        keyring_position: keyring_position(keyrings, &account.address),
    }
}

/// Ordered, enriched copies of the accounts exposed to `origin`.
pub fn order_connected_accounts(
    inputs: &OrderingInputs<'_>,
    origin: &str,
    config: &OrderingConfig,
) -> Vec<AccountRecord> {
    let history = inputs
        .history
        .get(origin)
        .and_then(|capabilities| capabilities.get(&config.eth_accounts_capability));

    let mut seen: Vec<&str> = Vec::with_capacity(inputs.permitted.len());
    let mut keyed: Vec<(SortKey, AccountRecord)> = Vec::new();

    for address in inputs.permitted {
        if seen.iter().any(|s| addresses_match(s, address)) {
            continue;
        }
        seen.push(address);

        for record in inputs
            .accounts
            .accounts
            .values()
            .filter(|record| addresses_match(&record.address, address))
        {
            keyed.push((sort_key(record, inputs.keyrings), enrich(record, history)));
        }
    }

    // `sort_by` is stable: equal keys keep allow-list then account-map order.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, account)| account).collect()
}

fn enrich(record: &AccountRecord, history: Option<&PermissionHistoryEntry>) -> AccountRecord {
    let mut enriched = record.clone();
    let last_active = history.and_then(|entry| {
        entry
            .accounts
            .iter()
            .find(|(address, _)| addresses_match(address, &record.address))
            .map(|(_, time)| *time)
    });
    if let Some(time) = last_active {
        enriched.metadata.last_active = Some(time);
    }
    enriched
}
